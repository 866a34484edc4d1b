//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

use crate::error::ExtractorError;

/// Default title given to plots whose text names none
pub const DEFAULT_PLOT_TITLE: &str = "AI 生成情节";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Title used when a plot outline names no title
    pub plot_title_placeholder: String,

    /// Longest bare `Label:` line (characters, colon excluded) treated as a heading
    pub max_label_chars: usize,

    /// Longest key (characters) accepted in a world `key: value` entry
    pub max_pair_key_chars: usize,

    /// Accept `**bold**` / `__bold__` markup around labels and keys
    pub strip_emphasis: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.plot_title_placeholder.trim().is_empty() {
            return Err(ExtractorError::Config(
                "plot_title_placeholder must not be empty".to_string(),
            ));
        }
        if self.max_label_chars < 2 {
            return Err(ExtractorError::Config(
                "max_label_chars must be at least 2".to_string(),
            ));
        }
        if self.max_label_chars > 200 {
            return Err(ExtractorError::Config(
                "max_label_chars cannot exceed 200".to_string(),
            ));
        }
        if self.max_pair_key_chars == 0 {
            return Err(ExtractorError::Config(
                "max_pair_key_chars must be greater than 0".to_string(),
            ));
        }
        if self.max_pair_key_chars > 200 {
            return Err(ExtractorError::Config(
                "max_pair_key_chars cannot exceed 200".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            plot_title_placeholder: DEFAULT_PLOT_TITLE.to_string(),
            max_label_chars: 40,
            max_pair_key_chars: 50,
            strip_emphasis: true,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: only plain labels, short headings and keys
    pub fn strict() -> Self {
        Self {
            max_label_chars: 24,
            max_pair_key_chars: 30,
            strip_emphasis: false,
            ..Self::default()
        }
    }

    /// Lenient preset: longer headings and keys for verbose model output
    pub fn lenient() -> Self {
        Self {
            max_label_chars: 60,
            max_pair_key_chars: 80,
            strip_emphasis: true,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
