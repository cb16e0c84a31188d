//! `.gitignore` maintenance
//!
//! The marker file is machine-local, so it gets listed in the working
//! directory's `.gitignore`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{EnvarsError, Result};

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Makes sure `.gitignore` in `dir` lists `entry`, creating the file if needed
///
/// Returns true if the file was changed.
pub fn ensure_entry(dir: &Path, entry: &str) -> Result<bool> {
    let path = dir.join(IGNORE_FILE_NAME);

    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(EnvarsError::io("Failed to read", &path, e)),
    };

    if existing.lines().any(|line| line.trim() == entry) {
        return Ok(false);
    }

    let new_content = if existing.is_empty() || existing.ends_with('\n') {
        format!("{}{}\n", existing, entry)
    } else {
        format!("{}\n{}\n", existing, entry)
    };

    fs::write(&path, new_content).map_err(|e| EnvarsError::io("Failed to write", &path, e))?;

    debug!(event = "ignore.updated", path = %path.display(), entry);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_file() {
        let dir = TempDir::new().unwrap();

        assert!(ensure_entry(dir.path(), ".envars.json").unwrap());

        let content = fs::read_to_string(dir.path().join(IGNORE_FILE_NAME)).unwrap();
        assert_eq!(content, ".envars.json\n");
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(IGNORE_FILE_NAME), "target").unwrap();

        ensure_entry(dir.path(), ".envars.json").unwrap();

        let content = fs::read_to_string(dir.path().join(IGNORE_FILE_NAME)).unwrap();
        assert_eq!(content, "target\n.envars.json\n");
    }

    #[test]
    fn does_not_duplicate_entry() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(IGNORE_FILE_NAME), "target/\n.envars.json\n").unwrap();

        assert!(!ensure_entry(dir.path(), ".envars.json").unwrap());

        let content = fs::read_to_string(dir.path().join(IGNORE_FILE_NAME)).unwrap();
        assert_eq!(content, "target/\n.envars.json\n");
    }
}
