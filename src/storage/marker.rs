//! Project marker file
//!
//! `.envars.json` links a working directory to one stored project. A
//! missing, empty or half-filled marker means the directory is not linked.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Project, ProjectId};
use crate::error::{EnvarsError, Result};

/// Reserved file name of the marker
pub const MARKER_FILE_NAME: &str = ".envars.json";

/// Content of the marker file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub project_id: ProjectId,
    pub project_name: String,
}

impl Marker {
    pub fn for_project(project: &Project) -> Self {
        Self {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
        }
    }

    fn is_blank(&self) -> bool {
        self.project_id.is_blank() || self.project_name.trim().is_empty()
    }
}

/// Marker file inside a working directory
pub struct MarkerFile {
    path: PathBuf,
}

impl MarkerFile {
    /// Marker file for the given working directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(MARKER_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the marker, `None` if the directory is not linked
    pub fn read(&self) -> Result<Option<Marker>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(EnvarsError::io("Failed to read marker", &self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let marker: Marker =
            serde_json::from_str(&content).map_err(|source| EnvarsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if marker.is_blank() {
            debug!(event = "marker.blank", path = %self.path.display());
            return Ok(None);
        }

        Ok(Some(marker))
    }

    /// Writes the marker, replacing any previous one
    pub fn write(&self, marker: &Marker) -> Result<()> {
        let json = serde_json::to_string_pretty(marker).map_err(|source| EnvarsError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json + "\n")
            .map_err(|e| EnvarsError::io("Failed to write marker", &self.path, e))?;

        debug!(event = "marker.written", path = %self.path.display(), project = %marker.project_name);
        Ok(())
    }

    /// Removes the marker; a missing file is not an error
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(event = "marker.deleted", path = %self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EnvarsError::io("Failed to delete marker", &self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn marker(id: &str, name: &str) -> Marker {
        Marker {
            project_id: ProjectId::from(id),
            project_name: name.to_string(),
        }
    }

    #[test]
    fn missing_marker_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert_eq!(MarkerFile::in_dir(dir.path()).read().unwrap(), None);
    }

    #[test]
    fn empty_marker_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        let file = MarkerFile::in_dir(dir.path());
        fs::write(file.path(), "").unwrap();

        assert_eq!(file.read().unwrap(), None);
    }

    #[test]
    fn blank_fields_are_not_initialized() {
        let dir = TempDir::new().unwrap();
        let file = MarkerFile::in_dir(dir.path());

        file.write(&marker("", "demo")).unwrap();
        assert_eq!(file.read().unwrap(), None);

        file.write(&marker("a1", "  ")).unwrap();
        assert_eq!(file.read().unwrap(), None);
    }

    #[test]
    fn malformed_marker_fails() {
        let dir = TempDir::new().unwrap();
        let file = MarkerFile::in_dir(dir.path());
        fs::write(file.path(), "{\"project_id\":").unwrap();

        assert!(matches!(file.read(), Err(EnvarsError::Parse { .. })));
    }

    #[test]
    fn write_and_read() {
        let dir = TempDir::new().unwrap();
        let file = MarkerFile::in_dir(dir.path());

        file.write(&marker("a1", "demo")).unwrap();
        file.write(&marker("b2", "api")).unwrap();

        assert_eq!(file.read().unwrap(), Some(marker("b2", "api")));

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["project_id"], "b2");
        assert_eq!(raw["project_name"], "api");
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = MarkerFile::in_dir(dir.path());

        file.write(&marker("a1", "demo")).unwrap();
        file.delete().unwrap();
        assert!(!file.path().exists());

        file.delete().unwrap();
    }
}
