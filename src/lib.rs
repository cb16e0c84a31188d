//! envars - keep your project's `.env` files in a local store
//!
//! Each project is a named bundle of env file snapshots kept in a single
//! JSON store under the user's home directory. A marker file links a
//! working directory to its project so files can be synced in and pulled
//! back out.

pub mod domain;
pub mod storage;
pub mod workspace;
pub mod error;
pub mod logging;
pub mod cli;

pub use domain::{EnvFile, KeyValue, Project, ProjectId};
pub use error::EnvarsError;
pub use workspace::Workspace;
