//! Record module - any one of the four record shapes

use crate::{
    ChapterOutline, CharacterSheet, PlotOutline, RecordKind, StructuredRecord, WorldSetting,
};

/// A record of any kind, as returned by kind-dispatched extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Character sheet
    Character(CharacterSheet),

    /// Plot outline
    Plot(PlotOutline),

    /// Chapter outline
    Chapter(ChapterOutline),

    /// World setting
    World(WorldSetting),
}

impl Record {
    /// An empty record of the given kind
    pub fn blank(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Character => CharacterSheet::default().into(),
            RecordKind::Plot => PlotOutline::default().into(),
            RecordKind::Chapter => ChapterOutline::default().into(),
            RecordKind::World => WorldSetting::default().into(),
        }
    }

    /// Canonical field names of a record kind, in declaration order
    pub fn field_names(kind: RecordKind) -> Vec<&'static str> {
        Self::blank(kind).fields().into_iter().map(|(name, _)| name).collect()
    }

    /// Borrow the wrapped record through the shared trait
    pub fn as_structured(&self) -> &dyn StructuredRecord {
        match self {
            Record::Character(r) => r,
            Record::Plot(r) => r,
            Record::Chapter(r) => r,
            Record::World(r) => r,
        }
    }
}

impl StructuredRecord for Record {
    fn kind(&self) -> RecordKind {
        self.as_structured().kind()
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        self.as_structured().fields()
    }
}

impl From<CharacterSheet> for Record {
    fn from(r: CharacterSheet) -> Self {
        Record::Character(r)
    }
}

impl From<PlotOutline> for Record {
    fn from(r: PlotOutline) -> Self {
        Record::Plot(r)
    }
}

impl From<ChapterOutline> for Record {
    fn from(r: ChapterOutline) -> Self {
        Record::Chapter(r)
    }
}

impl From<WorldSetting> for Record {
    fn from(r: WorldSetting) -> Self {
        Record::World(r)
    }
}
