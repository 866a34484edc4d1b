//! Error types for the Extractor
//!
//! Extraction itself is total and never fails; these errors only arise while
//! building an [`Extractor`](crate::Extractor) from a configuration.

use thiserror::Error;

/// Errors that can occur while configuring an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// A heading or field pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// TOML parsing or serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Pattern(e.to_string())
    }
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}
