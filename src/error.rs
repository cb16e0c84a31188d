//! Error type shared by the store, the marker file and the commands
//!
//! Variants split into two kinds. *Expected* conditions (nothing to sync,
//! directory not linked to a project, unknown name...) are reported to the
//! user as guidance and the command exits cleanly. Everything else is a
//! real failure and terminates the command with a non-zero exit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvarsError {
    #[error("This directory is not linked to a project. Run 'envars new' or 'envars pull' first.")]
    NotInitialized,

    #[error("This directory is already linked to project '{name}'.")]
    AlreadyInitialized { name: String },

    #[error("Project '{0}' not found.")]
    ProjectNotFound(String),

    #[error("A project named '{0}' already exists.")]
    ProjectExists(String),

    #[error("No projects found. Create one with 'envars new'.")]
    NoProjects,

    #[error("No .env files found in {}.", .0.display())]
    NoCandidates(PathBuf),

    #[error("Project name cannot be empty.")]
    EmptyName,

    #[error("Cancelled.")]
    Cancelled,

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Refusing to write '{0}': not a .env file name in the working directory")]
    InvalidFileName(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[source] inquire::InquireError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EnvarsError {
    /// Wraps an I/O error with the action and path it came from
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        EnvarsError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable name used in JSON output
    pub fn code(&self) -> &'static str {
        match self {
            EnvarsError::NotInitialized => "not_initialized",
            EnvarsError::AlreadyInitialized { .. } => "already_initialized",
            EnvarsError::ProjectNotFound(_) => "project_not_found",
            EnvarsError::ProjectExists(_) => "project_exists",
            EnvarsError::NoProjects => "no_projects",
            EnvarsError::NoCandidates(_) => "no_env_files",
            EnvarsError::EmptyName => "empty_name",
            EnvarsError::Cancelled => "cancelled",
            EnvarsError::Parse { .. } => "parse_error",
            EnvarsError::Io { .. } => "io_error",
            EnvarsError::InvalidFileName(_) => "invalid_file_name",
            EnvarsError::Prompt(_) => "prompt_error",
            EnvarsError::Config(_) => "config_error",
        }
    }

    /// Returns true for conditions that are reported as guidance, not failures
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            EnvarsError::NotInitialized
                | EnvarsError::AlreadyInitialized { .. }
                | EnvarsError::ProjectNotFound(_)
                | EnvarsError::ProjectExists(_)
                | EnvarsError::NoProjects
                | EnvarsError::NoCandidates(_)
                | EnvarsError::EmptyName
                | EnvarsError::Cancelled
        )
    }
}

impl From<inquire::InquireError> for EnvarsError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => EnvarsError::Cancelled,
            other => EnvarsError::Prompt(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvarsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_conditions_are_expected() {
        assert!(EnvarsError::NotInitialized.is_expected());
        assert!(EnvarsError::ProjectNotFound("demo".into()).is_expected());
        assert!(EnvarsError::NoCandidates(PathBuf::from(".")).is_expected());
        assert!(EnvarsError::NoProjects.is_expected());
    }

    #[test]
    fn io_and_parse_are_fatal() {
        let io = EnvarsError::io(
            "Failed to read",
            "/tmp/x",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(!io.is_expected());

        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let parse = EnvarsError::Parse {
            path: PathBuf::from("data.json"),
            source,
        };
        assert!(!parse.is_expected());
        assert!(parse.to_string().starts_with("Failed to parse data.json"));
    }

    #[test]
    fn cancelled_prompt_maps_to_cancelled() {
        let err: EnvarsError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(err, EnvarsError::Cancelled));

        let err: EnvarsError = inquire::InquireError::NotTTY.into();
        assert!(matches!(err, EnvarsError::Prompt(_)));
    }
}
