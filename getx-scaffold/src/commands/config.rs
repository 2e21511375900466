//! Configuration commands

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use std::fs;
use std::path::{Path, PathBuf};

use getx_scaffold::ScaffoldConfig;

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");

/// Configuration commands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration as TOML
    Show {
        /// Configuration file (defaults to ./getx-scaffold.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the user configuration file path
    Path,
    /// Write the default configuration to the user configuration file
    Init,
}

impl ConfigCommand {
    /// Execute the config command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration cannot be loaded or serialized
    /// - No user configuration directory exists on this platform
    /// - The user configuration file already exists (`init`)
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::Show { config } => {
                let config = ScaffoldConfig::load(config.as_deref())
                    .context("Failed to load configuration")?;
                print!("{}", config.to_toml()?);
            }
            Self::Path => {
                println!("{}", user_config_path()?.display());
            }
            Self::Init => {
                let path = user_config_path()?;
                write_default_config(&path)?;
                println!(
                    "{} Wrote default configuration to {}",
                    style(SUCCESS).green(),
                    style(path.display()).cyan()
                );
            }
        }

        Ok(())
    }
}

fn user_config_path() -> Result<PathBuf> {
    ScaffoldConfig::recommended_path().context("Could not determine the user configuration directory")
}

/// Write the default configuration, refusing to replace an existing file
fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "Configuration file already exists: {}. Remove it first to start over.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let contents = ScaffoldConfig::default().to_toml()?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
