//! Inkwell CLI - Recover structured story records from generated text.

use anyhow::Context;
use clap::Parser;
use inkwell_cli::commands;
use inkwell_cli::cli::InputArgs;
use inkwell_cli::{Cli, Command, Config, Formatter};
use inkwell_domain::RecordKind;
use inkwell_extractor::Extractor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `--verbose` wins over `INKWELL_LOG` and `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("INKWELL_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_ref().map(PathBuf::from);

    // An explicit path must exist unless the command manages the file itself
    let manages_config = matches!(cli.command, Command::Config(_));
    let mut config = match &config_path {
        Some(path) if manages_config && !path.exists() => Config::default(),
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(preset) = cli.preset {
        config.extractor = preset.into();
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Kinds => commands::execute_kinds(&formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, config_path.as_deref(), &formatter)?
        }
        Command::Character(input) => {
            extract(RecordKind::Character, &input, &config, &formatter)?
        }
        Command::Plot(input) => extract(RecordKind::Plot, &input, &config, &formatter)?,
        Command::Chapter(input) => extract(RecordKind::Chapter, &input, &config, &formatter)?,
        Command::World(input) => extract(RecordKind::World, &input, &config, &formatter)?,
    }

    Ok(())
}

fn extract(
    kind: RecordKind,
    input: &InputArgs,
    config: &Config,
    formatter: &Formatter,
) -> anyhow::Result<()> {
    let extractor = Extractor::new(config.extractor.clone())?;
    commands::execute_extract(kind, input, &extractor, formatter)?;
    Ok(())
}
