//! # Storage Layer
//!
//! Everything that touches the filesystem.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Projects | JSON array | `~/.envars/data.json` |
//! | Marker | JSON object | `<workdir>/.envars.json` |
//! | Env files | `KEY=VALUE` lines | `<workdir>/.env*` |
//! | Ignore list | plain text | `<workdir>/.gitignore` |
//! | Config | TOML | `~/.config/envars/config.toml` |
//!
//! ## Concurrency
//!
//! There is no locking. Store writes go through a temp file and a rename,
//! so a crash never leaves a half-written store, but two invocations
//! racing on the store still end with the last writer's content.
//!
//! ## Key Types
//!
//! - [`ProjectStore`] - Load and save the project list
//! - [`MarkerFile`] - Link a working directory to a project
//! - [`Config`] - Global configuration and store path resolution

mod store;
mod marker;
mod config;
pub mod scanner;
pub mod ignore;

pub use store::ProjectStore;
pub use marker::{Marker, MarkerFile, MARKER_FILE_NAME};
pub use config::{Config, GlobalConfig, OutputFormat, CONFIG_ENV};
