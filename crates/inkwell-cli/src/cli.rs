//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use inkwell_domain::RecordKind;
use inkwell_extractor::ExtractorConfig;

/// Inkwell - Recover structured story records from generated text.
#[derive(Debug, Parser)]
#[command(name = "inkwell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "INKWELL_CONFIG")]
    pub config: Option<String>,

    /// Extractor preset, overriding the configured extractor settings
    #[arg(long, value_enum, global = true)]
    pub preset: Option<PresetArg>,

    /// Log extraction decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (non-empty fields only)
    Quiet,
}

/// Extractor presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Built-in defaults
    Default,
    /// Plain labels only, short headings and keys
    Strict,
    /// Longer headings and keys for verbose output
    Lenient,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a character sheet
    Character(InputArgs),

    /// Extract a plot outline
    Plot(InputArgs),

    /// Extract a chapter outline
    #[command(alias = "outline")]
    Chapter(InputArgs),

    /// Extract a world setting
    World(InputArgs),

    /// List supported record kinds and their fields
    Kinds,

    /// Show or initialize configuration
    Config(ConfigArgs),
}

impl Command {
    /// Record kind and input of an extraction command
    pub fn extraction(&self) -> Option<(RecordKind, &InputArgs)> {
        match self {
            Command::Character(args) => Some((RecordKind::Character, args)),
            Command::Plot(args) => Some((RecordKind::Plot, args)),
            Command::Chapter(args) => Some((RecordKind::Chapter, args)),
            Command::World(args) => Some((RecordKind::World, args)),
            Command::Kinds | Command::Config(_) => None,
        }
    }
}

/// Where the text to extract from comes from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to extract from
    #[arg(conflicts_with_all = ["file", "stdin"])]
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short = 'i', long, conflicts_with = "stdin")]
    pub file: Option<String>,

    /// Read text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for ExtractorConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => ExtractorConfig::default(),
            PresetArg::Strict => ExtractorConfig::strict(),
            PresetArg::Lenient => ExtractorConfig::lenient(),
        }
    }
}
