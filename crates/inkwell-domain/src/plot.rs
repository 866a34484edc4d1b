//! Plot outline record

use crate::{RecordKind, StructuredRecord};

/// Plot outline recovered from generated text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotOutline {
    /// Plot title; falls back to a placeholder
    pub title: String,

    /// Main conflict or hook; falls back to the whole source text
    pub description: String,

    /// Key plot points; falls back to the whole source text
    pub key_events: String,

    /// Characters involved
    pub characters: String,

    /// Conflicts
    pub conflicts: String,
}

/// Canonical fields of a [`PlotOutline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotField {
    /// `title`
    Title,
    /// `description`
    Description,
    /// `key_events`
    KeyEvents,
    /// `characters`
    Characters,
    /// `conflicts`
    Conflicts,
}

impl PlotField {
    /// All fields in declaration order
    pub const ALL: [PlotField; 5] = [
        PlotField::Title,
        PlotField::Description,
        PlotField::KeyEvents,
        PlotField::Characters,
        PlotField::Conflicts,
    ];

    /// Canonical field name
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotField::Title => "title",
            PlotField::Description => "description",
            PlotField::KeyEvents => "key_events",
            PlotField::Characters => "characters",
            PlotField::Conflicts => "conflicts",
        }
    }
}

impl PlotOutline {
    /// Borrow the value of a field
    pub fn get(&self, field: PlotField) -> &str {
        match field {
            PlotField::Title => &self.title,
            PlotField::Description => &self.description,
            PlotField::KeyEvents => &self.key_events,
            PlotField::Characters => &self.characters,
            PlotField::Conflicts => &self.conflicts,
        }
    }

    /// Mutably borrow the value of a field
    pub fn get_mut(&mut self, field: PlotField) -> &mut String {
        match field {
            PlotField::Title => &mut self.title,
            PlotField::Description => &mut self.description,
            PlotField::KeyEvents => &mut self.key_events,
            PlotField::Characters => &mut self.characters,
            PlotField::Conflicts => &mut self.conflicts,
        }
    }
}

impl StructuredRecord for PlotOutline {
    fn kind(&self) -> RecordKind {
        RecordKind::Plot
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        PlotField::ALL
            .iter()
            .map(|f| (f.as_str(), self.get(*f).to_string()))
            .collect()
    }
}
