//! World-building record

use std::collections::BTreeMap;

use crate::{RecordKind, StructuredRecord};

/// World setting recovered from generated text
///
/// `era` is kept verbatim. The other three sections are decomposed into
/// key/value entries; an empty map means no structured entries were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldSetting {
    /// Era or time period
    pub era: String,

    /// Rules and laws of the world
    pub rules: BTreeMap<String, String>,

    /// Named locations
    pub locations: BTreeMap<String, String>,

    /// Cultural notes
    pub culture: BTreeMap<String, String>,
}

/// Sections of a [`WorldSetting`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldSection {
    /// `era`
    Era,
    /// `rules`
    Rules,
    /// `locations`
    Locations,
    /// `culture`
    Culture,
}

impl WorldSection {
    /// All sections in declaration order
    pub const ALL: [WorldSection; 4] = [
        WorldSection::Era,
        WorldSection::Rules,
        WorldSection::Locations,
        WorldSection::Culture,
    ];

    /// Canonical field name
    pub fn as_str(&self) -> &'static str {
        match self {
            WorldSection::Era => "era",
            WorldSection::Rules => "rules",
            WorldSection::Locations => "locations",
            WorldSection::Culture => "culture",
        }
    }
}

impl WorldSetting {
    /// Entries of a keyed section; `None` for [`WorldSection::Era`]
    pub fn entries(&self, section: WorldSection) -> Option<&BTreeMap<String, String>> {
        match section {
            WorldSection::Era => None,
            WorldSection::Rules => Some(&self.rules),
            WorldSection::Locations => Some(&self.locations),
            WorldSection::Culture => Some(&self.culture),
        }
    }

    /// Mutable entries of a keyed section; `None` for [`WorldSection::Era`]
    pub fn entries_mut(&mut self, section: WorldSection) -> Option<&mut BTreeMap<String, String>> {
        match section {
            WorldSection::Era => None,
            WorldSection::Rules => Some(&mut self.rules),
            WorldSection::Locations => Some(&mut self.locations),
            WorldSection::Culture => Some(&mut self.culture),
        }
    }
}

impl StructuredRecord for WorldSetting {
    fn kind(&self) -> RecordKind {
        RecordKind::World
    }

    /// Keyed sections render as one `key: value` line per entry
    fn fields(&self) -> Vec<(&'static str, String)> {
        WorldSection::ALL
            .iter()
            .map(|section| {
                let value = match self.entries(*section) {
                    None => self.era.clone(),
                    Some(entries) => entries
                        .iter()
                        .map(|(k, v)| format!("{}: {}", k, v))
                        .collect::<Vec<_>>()
                        .join("\n"),
                };
                (section.as_str(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_has_no_entries() {
        let mut world = WorldSetting::default();
        assert!(world.entries(WorldSection::Era).is_none());
        assert!(world.entries_mut(WorldSection::Era).is_none());
    }

    #[test]
    fn test_fields_render_entries() {
        let mut world = WorldSetting::default();
        if let Some(rules) = world.entries_mut(WorldSection::Rules) {
            rules.insert("Magic".to_string(), "forbidden".to_string());
            rules.insert("Currency".to_string(), "gold".to_string());
        }
        let fields = world.fields();
        assert_eq!(fields[1].0, "rules");
        assert_eq!(fields[1].1, "Currency: gold\nMagic: forbidden");
        assert_eq!(world.empty_fields(), vec!["era", "locations", "culture"]);
    }
}
