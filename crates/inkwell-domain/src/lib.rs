//! Inkwell Domain Layer
//!
//! Record types recovered from free-form model output by `inkwell-extractor`.
//! This crate has ZERO external dependencies: records are plain values that
//! the extractor builds and that callers copy into their own form state.
//!
//! ## Key Concepts
//!
//! - **Record**: one of four shapes (character sheet, plot outline, chapter
//!   outline, world setting), always fully populated
//! - **Canonical field**: the fixed field name a record exposes, independent
//!   of which source-language label produced its value
//! - **Record kind**: which extractor to run for a piece of generated text

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chapter;
pub mod character;
pub mod kind;
pub mod plot;
pub mod record;
pub mod traits;
pub mod world;

// Re-exports for convenience
pub use chapter::{ChapterField, ChapterOutline};
pub use character::{CharacterField, CharacterSheet};
pub use kind::RecordKind;
pub use plot::{PlotField, PlotOutline};
pub use record::Record;
pub use traits::StructuredRecord;
pub use world::{WorldSection, WorldSetting};
