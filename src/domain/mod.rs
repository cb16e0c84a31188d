//! Domain models for envars
//!
//! Contains the project model and `.env` parsing without any I/O concerns.

mod id;
mod project;
pub mod dotenv;

pub use id::ProjectId;
pub use project::{find_by_id, find_by_name, names, EnvFile, KeyValue, Project};
