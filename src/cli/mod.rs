//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `new` | Create a project and link the current directory to it |
//! | `sync` | Store the directory's `.env*` files in the linked project |
//! | `list` | Show stored project names |
//! | `pull` | Write a project's files into the current directory |
//! | `delete` | Remove a project from the store |
//!
//! `new`, `pull` and `delete` prompt interactively; pass `--name` to skip
//! the prompt.
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod prompt;
mod project_cmd;
mod files_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
