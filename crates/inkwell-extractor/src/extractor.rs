//! Main Extractor implementation

use std::sync::LazyLock;

use inkwell_domain::{
    ChapterOutline, CharacterSheet, PlotOutline, Record, RecordKind, WorldSetting,
};
use tracing::debug;

use crate::chapter::ChapterParser;
use crate::character::CharacterParser;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::plot::PlotParser;
use crate::rules::HeadingRules;
use crate::world::WorldParser;

static SHARED: LazyLock<Extractor> = LazyLock::new(|| {
    Extractor::new(ExtractorConfig::default()).expect("default extractor patterns compile")
});

/// Recovers structured records from free-form generated text
///
/// All patterns are compiled once in [`Extractor::new`]; every `parse_*`
/// call is a pure function of its input and never fails. An `Extractor` is
/// `Send + Sync` and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    rules: HeadingRules,
    character: CharacterParser,
    plot: PlotParser,
    chapter: ChapterParser,
    world: WorldParser,
}

impl Extractor {
    /// Create an extractor from a validated configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;

        let rules = HeadingRules::new(&config)?;
        let character = CharacterParser::new(&config);
        let plot = PlotParser::new(&config);
        let chapter = ChapterParser::new(&config);
        let world = WorldParser::new(&config)?;

        debug!(?config, "Extractor ready");

        Ok(Self {
            config,
            rules,
            character,
            plot,
            chapter,
            world,
        })
    }

    /// Process-wide extractor built from the default configuration
    pub fn shared() -> &'static Extractor {
        &SHARED
    }

    /// Configuration this extractor was built from
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Heading rules used to delimit sections
    pub fn heading_rules(&self) -> &HeadingRules {
        &self.rules
    }

    /// Extract a character sheet
    pub fn parse_character(&self, text: &str) -> CharacterSheet {
        self.character.parse(&self.rules, text)
    }

    /// Extract a plot outline
    pub fn parse_plot(&self, text: &str) -> PlotOutline {
        self.plot.parse(&self.rules, text)
    }

    /// Extract a chapter outline
    pub fn parse_chapter_outline(&self, text: &str) -> ChapterOutline {
        self.chapter.parse(&self.rules, text)
    }

    /// Extract a world setting
    pub fn parse_world(&self, text: &str) -> WorldSetting {
        self.world.parse(&self.rules, text)
    }

    /// Extract the record of the given kind
    pub fn extract(&self, kind: RecordKind, text: &str) -> Record {
        debug!(kind = %kind, chars = text.chars().count(), "Extracting record");
        match kind {
            RecordKind::Character => self.parse_character(text).into(),
            RecordKind::Plot => self.parse_plot(text).into(),
            RecordKind::Chapter => self.parse_chapter_outline(text).into(),
            RecordKind::World => self.parse_world(text).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell_domain::StructuredRecord;

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            max_pair_key_chars: 0,
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            Extractor::new(config),
            Err(ExtractorError::Config(_))
        ));
    }

    #[test]
    fn test_extract_dispatches_by_kind() {
        let extractor = Extractor::shared();
        for kind in RecordKind::ALL {
            assert_eq!(extractor.extract(kind, "").kind(), kind);
        }
    }

    #[test]
    fn test_extract_matches_direct_call() {
        let extractor = Extractor::shared();
        let text = "Chapter Title: Dawn\nSummary: the siege ends";
        assert_eq!(
            extractor.extract(RecordKind::Chapter, text),
            Record::Chapter(extractor.parse_chapter_outline(text))
        );
    }

    #[test]
    fn test_extractor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Extractor>();
    }
}
