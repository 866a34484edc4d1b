//! Record kinds - which extractor a piece of generated text is meant for

use std::fmt;

/// Kind of structured record recovered from generated text
///
/// Mirrors the generation contexts of the writing assistant:
/// - Character: a character sheet
/// - Plot: a plot outline
/// - Chapter: a chapter outline
/// - World: a world-building bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Character sheet
    Character,

    /// Plot outline
    Plot,

    /// Chapter outline
    Chapter,

    /// World-building bundle
    World,
}

impl RecordKind {
    /// All kinds, in display order
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Character,
        RecordKind::Plot,
        RecordKind::Chapter,
        RecordKind::World,
    ];

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Character => "character",
            RecordKind::Plot => "plot",
            RecordKind::Chapter => "chapter",
            RecordKind::World => "world",
        }
    }

    /// Parse a kind from a string, accepting common aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "character" | "characters" | "角色" => Some(RecordKind::Character),
            "plot" | "plots" | "情节" => Some(RecordKind::Plot),
            "chapter" | "outline" | "chapter_outline" | "chapter-outline" | "章节" => {
                Some(RecordKind::Chapter)
            }
            "world" | "setting" | "worldbuilding" | "世界观" => Some(RecordKind::World),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid record kind: {}", s))
    }
}
