//! Chapter outline record

use crate::{RecordKind, StructuredRecord};

/// Chapter outline recovered from generated text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterOutline {
    /// Chapter title
    pub title: String,

    /// Chapter summary; falls back to the whole source text
    pub summary: String,

    /// Key events (canonical name `keyEvents`)
    pub key_events: String,
}

/// Canonical fields of a [`ChapterOutline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChapterField {
    /// `title`
    Title,
    /// `summary`
    Summary,
    /// `keyEvents`
    KeyEvents,
}

impl ChapterField {
    /// All fields in declaration order
    pub const ALL: [ChapterField; 3] = [
        ChapterField::Title,
        ChapterField::Summary,
        ChapterField::KeyEvents,
    ];

    /// Canonical field name
    ///
    /// Chapter outlines keep the camel-case `keyEvents` that the editing
    /// views bind to, unlike plot outlines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterField::Title => "title",
            ChapterField::Summary => "summary",
            ChapterField::KeyEvents => "keyEvents",
        }
    }
}

impl ChapterOutline {
    /// Borrow the value of a field
    pub fn get(&self, field: ChapterField) -> &str {
        match field {
            ChapterField::Title => &self.title,
            ChapterField::Summary => &self.summary,
            ChapterField::KeyEvents => &self.key_events,
        }
    }

    /// Mutably borrow the value of a field
    pub fn get_mut(&mut self, field: ChapterField) -> &mut String {
        match field {
            ChapterField::Title => &mut self.title,
            ChapterField::Summary => &mut self.summary,
            ChapterField::KeyEvents => &mut self.key_events,
        }
    }
}

impl StructuredRecord for ChapterOutline {
    fn kind(&self) -> RecordKind {
        RecordKind::Chapter
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        ChapterField::ALL
            .iter()
            .map(|f| (f.as_str(), self.get(*f).to_string()))
            .collect()
    }
}
