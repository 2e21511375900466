//! getx-scaffold CLI tool
//!
//! # Usage
//!
//! ```bash
//! # Prompt for a page name and generate it under lib/pages
//! getx-scaffold page lib/pages
//!
//! # Non-interactive
//! getx-scaffold page lib/pages --name user_profile
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ConfigCommand, PageCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "getx-scaffold")]
#[command(version)]
#[command(about = "Generate GetX page boilerplate for Flutter projects", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate view, binding, logic and state files for a page
    Page {
        /// Directory in which the page folder is created
        #[arg(default_value = ".")]
        target: PathBuf,
        /// Page name (`snake_case` or `kebab-case`, e.g. `user_profile`); prompted for when omitted
        #[arg(short, long)]
        name: Option<String>,
        /// Extension for generated files (overrides configuration)
        #[arg(short, long)]
        extension: Option<String>,
        /// Print the generated files instead of writing them
        #[arg(long)]
        dry_run: bool,
        /// Configuration file (defaults to ./getx-scaffold.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Inspect or create configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    getx_scaffold::observability::init(cli.verbose)?;

    match cli.command {
        Commands::Page {
            target,
            name,
            extension,
            dry_run,
            config,
        } => {
            let cmd = PageCommand::new(target, name, extension, dry_run, config);
            cmd.execute()?;
        }
        Commands::Config { command } => {
            command.execute()?;
        }
    }

    Ok(())
}
