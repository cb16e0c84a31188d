//! JSON storage for the project list
//!
//! All projects live in a single JSON array, by default at
//! `~/.envars/data.json`. Every write replaces the whole file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Project;
use crate::error::{EnvarsError, Result};

/// Store for all projects
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Creates a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all projects
    ///
    /// A missing or blank file is an empty store.
    pub fn load(&self) -> Result<Vec<Project>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(event = "store.load_missing", path = %self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(EnvarsError::io("Failed to read store", &self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let projects: Vec<Project> =
            serde_json::from_str(&content).map_err(|source| EnvarsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(event = "store.loaded", path = %self.path.display(), projects = projects.len());
        Ok(projects)
    }

    /// Writes all projects (full rewrite through a temp file)
    pub fn save(&self, projects: &[Project]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| EnvarsError::io("Failed to create directory", parent, e))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = File::create(&temp_path)
                .map_err(|e| EnvarsError::io("Failed to create temp file", &temp_path, e))?;
            let mut writer = BufWriter::new(file);

            serde_json::to_writer_pretty(&mut writer, projects).map_err(|source| {
                EnvarsError::Parse {
                    path: temp_path.clone(),
                    source,
                }
            })?;
            writer
                .write_all(b"\n")
                .and_then(|_| writer.flush())
                .map_err(|e| EnvarsError::io("Failed to write store", &temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path)
            .map_err(|e| EnvarsError::io("Failed to replace store", &self.path, e))?;

        debug!(event = "store.saved", path = %self.path.display(), projects = projects.len());
        Ok(())
    }
}
