//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let target = init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", target.display()))
            );
            Ok(())
        }
    }
}

/// Write the default configuration, refusing to clobber an existing file.
fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };

    if target.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; pass --force to overwrite",
            target.display()
        )));
    }

    Config::default().save_to(&target)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init_config(Some(&path), false).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.extractor, Config::default().extractor);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        assert!(matches!(
            init_config(Some(&path), false),
            Err(CliError::InvalidInput(_))
        ));

        init_config(Some(&path), true).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }
}
