//! Inkwell Extractor
//!
//! Recovers structured records from free-form text returned by a language
//! model, in English or Chinese.
//!
//! # Overview
//!
//! Generated text has no schema contract: sections may be missing, reordered,
//! labelled in either language, or mix lists with paragraphs. The extractor
//! is a set of heuristic, deterministic parsers that always return a fully
//! populated record and never fail, whatever the input.
//!
//! # Architecture
//!
//! ```text
//! Text → normalize_lines → LineCursor scan ─┬─ LabelTable match → capture_section
//!                                           └─ skip
//!      → record with defaults backfilled
//! ```
//!
//! - **Line normalizer**: trimmed, non-empty lines in source order
//! - **Heading rules**: priority-ordered table deciding where a section ends
//! - **Section capture**: body lines after a heading, with guaranteed progress
//! - **Label tables**: bilingual labels mapped to canonical fields
//!
//! # Example Usage
//!
//! ```
//! use inkwell_extractor::{parse_character, parse_world};
//!
//! let sheet = parse_character("姓名：林夜\n外貌：高瘦");
//! assert_eq!(sheet.name, "林夜");
//! assert_eq!(sheet.appearance, "高瘦");
//!
//! let world = parse_world("Rules:\n- Magic: forbidden\n- Currency: gold");
//! assert_eq!(world.rules["Magic"], "forbidden");
//! ```

#![warn(missing_docs)]

mod chapter;
mod character;
mod config;
mod cursor;
mod error;
mod extractor;
mod labels;
mod lines;
mod plot;
mod rules;
mod section;
mod world;

#[cfg(test)]
mod tests;

pub use config::{ExtractorConfig, DEFAULT_PLOT_TITLE};
pub use cursor::{scan_sections, LineCursor};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use labels::{LabelMatch, LabelTable};
pub use lines::normalize_lines;
pub use rules::{HeadingRule, HeadingRules, Verdict};
pub use section::{capture_section, SectionCapture};

pub use inkwell_domain::{
    ChapterOutline, CharacterSheet, PlotOutline, Record, RecordKind, StructuredRecord,
    WorldSetting,
};

/// Extract a character sheet with the default configuration
pub fn parse_character(text: &str) -> CharacterSheet {
    Extractor::shared().parse_character(text)
}

/// Extract a plot outline with the default configuration
pub fn parse_plot(text: &str) -> PlotOutline {
    Extractor::shared().parse_plot(text)
}

/// Extract a chapter outline with the default configuration
pub fn parse_chapter_outline(text: &str) -> ChapterOutline {
    Extractor::shared().parse_chapter_outline(text)
}

/// Extract a world setting with the default configuration
pub fn parse_world(text: &str) -> WorldSetting {
    Extractor::shared().parse_world(text)
}
