//! Character sheet record

use crate::{RecordKind, StructuredRecord};

/// Character sheet recovered from generated text
///
/// Every field defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSheet {
    /// Character name
    pub name: String,

    /// Story role (protagonist, antagonist, ...)
    pub role: String,

    /// Free description; falls back to the whole source text
    pub description: String,

    /// Personality traits
    pub personality: String,

    /// Background story
    pub background: String,

    /// Physical appearance
    pub appearance: String,

    /// Relationships to other characters
    pub relationships: String,
}

/// Canonical fields of a [`CharacterSheet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterField {
    /// `name`
    Name,
    /// `role`
    Role,
    /// `description`
    Description,
    /// `personality`
    Personality,
    /// `background`
    Background,
    /// `appearance`
    Appearance,
    /// `relationships`
    Relationships,
}

impl CharacterField {
    /// All fields in declaration order
    pub const ALL: [CharacterField; 7] = [
        CharacterField::Name,
        CharacterField::Role,
        CharacterField::Description,
        CharacterField::Personality,
        CharacterField::Background,
        CharacterField::Appearance,
        CharacterField::Relationships,
    ];

    /// Canonical field name
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterField::Name => "name",
            CharacterField::Role => "role",
            CharacterField::Description => "description",
            CharacterField::Personality => "personality",
            CharacterField::Background => "background",
            CharacterField::Appearance => "appearance",
            CharacterField::Relationships => "relationships",
        }
    }
}

impl CharacterSheet {
    /// Borrow the value of a field
    pub fn get(&self, field: CharacterField) -> &str {
        match field {
            CharacterField::Name => &self.name,
            CharacterField::Role => &self.role,
            CharacterField::Description => &self.description,
            CharacterField::Personality => &self.personality,
            CharacterField::Background => &self.background,
            CharacterField::Appearance => &self.appearance,
            CharacterField::Relationships => &self.relationships,
        }
    }

    /// Mutably borrow the value of a field
    pub fn get_mut(&mut self, field: CharacterField) -> &mut String {
        match field {
            CharacterField::Name => &mut self.name,
            CharacterField::Role => &mut self.role,
            CharacterField::Description => &mut self.description,
            CharacterField::Personality => &mut self.personality,
            CharacterField::Background => &mut self.background,
            CharacterField::Appearance => &mut self.appearance,
            CharacterField::Relationships => &mut self.relationships,
        }
    }
}

impl StructuredRecord for CharacterSheet {
    fn kind(&self) -> RecordKind {
        RecordKind::Character
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        CharacterField::ALL
            .iter()
            .map(|f| (f.as_str(), self.get(*f).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blank() {
        let sheet = CharacterSheet::default();
        assert!(sheet.is_blank());
        assert_eq!(sheet.empty_fields().len(), CharacterField::ALL.len());
    }

    #[test]
    fn test_get_mut_targets_field() {
        let mut sheet = CharacterSheet::default();
        sheet.get_mut(CharacterField::Appearance).push_str("tall");
        assert_eq!(sheet.appearance, "tall");
        assert_eq!(sheet.get(CharacterField::Appearance), "tall");
    }

    #[test]
    fn test_empty_fields_skips_filled() {
        let sheet = CharacterSheet {
            name: "Lin Ye".to_string(),
            description: "   ".to_string(),
            ..Default::default()
        };
        let empty = sheet.empty_fields();
        assert!(!empty.contains(&"name"));
        assert!(empty.contains(&"description"));
    }
}
