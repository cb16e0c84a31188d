//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use super::files_cmd;
use super::output::Output;
use super::project_cmd;
use crate::logging::init_logging;
use crate::storage::{Config, OutputFormat, ProjectStore};
use crate::workspace::Workspace;

#[derive(Parser)]
#[command(name = "envars")]
#[command(author, version, about = "Save, sync and pull your .env files from a local store")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the project store file
    #[arg(long, global = true, env = "ENVARS_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Working directory (defaults to the current directory)
    #[arg(long, short = 'C', global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project where you can save your environment variables
    New {
        /// Project name (prompted for when omitted)
        #[arg(long, short)]
        name: Option<String>,
    },

    /// Sync the .env files of this directory to the store
    Sync,

    /// List all projects
    List,

    /// Pull environment variables from the store into this directory
    Pull {
        /// Project to pull when this directory is not linked yet (prompted for
        /// when omitted, ignored when the directory is already linked)
        #[arg(long, short)]
        name: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project to delete (prompted for when omitted)
        #[arg(long, short)]
        name: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let format = cli
        .format
        .or(config.global.default_format)
        .unwrap_or_default();
    let output = Output::new(format);

    let store_path = config.store_path(cli.store.as_deref())?;
    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    debug!(
        event = "cli.start",
        store = %store_path.display(),
        dir = %dir.display(),
        config = ?config.source,
    );

    let workspace = Workspace::new(dir, ProjectStore::new(store_path));

    let result = match cli.command {
        Commands::New { name } => project_cmd::new_project(&output, &workspace, name),
        Commands::Sync => files_cmd::sync(&output, &workspace),
        Commands::List => project_cmd::list_projects(&output, &workspace),
        Commands::Pull { name } => files_cmd::pull(&output, &workspace, name),
        Commands::Delete { name } => project_cmd::delete_project(&output, &workspace, name),
    };

    match result {
        Ok(()) => {
            debug!(event = "cli.done");
            Ok(())
        }
        Err(err) if err.is_expected() => {
            debug!(event = "cli.aborted", code = err.code());
            output.notice(&err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
