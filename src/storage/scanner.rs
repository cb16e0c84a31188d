//! Env file discovery and bulk file I/O
//!
//! Candidates are regular files in the working directory whose name starts
//! with `.env`, except the marker file. Reads and writes fan out over the
//! rayon pool and the call fails if any single file fails.

use std::fs;
use std::path::{Component, Path};

use rayon::prelude::*;
use tracing::debug;

use super::marker::MARKER_FILE_NAME;
use crate::domain::{dotenv, EnvFile};
use crate::error::{EnvarsError, Result};

/// File name prefix of env files
pub const ENV_FILE_PREFIX: &str = ".env";

/// Lists candidate env files in `dir`, sorted by name
pub fn list_candidate_files(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).map_err(|e| EnvarsError::io("Failed to read directory", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EnvarsError::io("Failed to read directory", dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if !name.starts_with(ENV_FILE_PREFIX) || name == MARKER_FILE_NAME {
            continue;
        }

        // Follows symlinks, so a linked .env counts
        if !entry.path().is_file() {
            continue;
        }

        files.push(name);
    }

    files.sort();
    debug!(event = "scan.candidates", dir = %dir.display(), count = files.len());
    Ok(files)
}

/// Reads and parses every named file in `dir`, keeping input order
pub fn read_snapshots(dir: &Path, files: &[String]) -> Result<Vec<EnvFile>> {
    files
        .par_iter()
        .map(|name| -> Result<EnvFile> {
            let path = dir.join(name);
            let content = fs::read_to_string(&path)
                .map_err(|e| EnvarsError::io("Failed to read env file", &path, e))?;
            let vars = dotenv::parse(&content);
            debug!(event = "scan.parsed", file = %name, vars = vars.len());
            Ok(EnvFile::new(name.clone(), vars))
        })
        .collect()
}

/// Checks that every stored file name is a plain `.env*` name
///
/// Names with directory parts or an absolute path would write outside the
/// working directory.
pub fn validate_file_names(items: &[EnvFile]) -> Result<()> {
    for item in items {
        let name = item.file_name.as_str();
        let mut components = Path::new(name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(part)), None) if part == name
        );

        if !plain || !name.starts_with(ENV_FILE_PREFIX) || name == MARKER_FILE_NAME {
            return Err(EnvarsError::InvalidFileName(item.file_name.clone()));
        }
    }
    Ok(())
}

/// Writes every env file into `dir`, overwriting existing files
///
/// Nothing is written if any file name is invalid. Files already written
/// stay in place if another write fails.
pub fn write_snapshots(dir: &Path, items: &[EnvFile]) -> Result<()> {
    validate_file_names(items)?;

    items.par_iter().try_for_each(|item| -> Result<()> {
        let path = dir.join(&item.file_name);
        fs::write(&path, dotenv::render(&item.vars))
            .map_err(|e| EnvarsError::io("Failed to write env file", &path, e))?;
        debug!(event = "pull.written", file = %item.file_name, vars = item.vars.len());
        Ok(())
    })
}
