//! Opaque project identifiers
//!
//! A project ID is 64 lowercase hex characters (256 bits). It is derived by
//! hashing fresh random bytes together with the project name and the
//! creation timestamp, so two projects never share an ID even when created
//! with the same name in the same instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh random ID
    pub fn generate(name: &str, timestamp: DateTime<Utc>) -> Self {
        let mut seed = [0u8; 32];
        fastrand::fill(&mut seed);

        let mut hasher = blake3::Hasher::new();
        hasher.update(&seed);
        hasher.update(name.as_bytes());
        hasher.update(&timestamp.timestamp_nanos_opt().unwrap_or(0).to_le_bytes());
        hasher.update(&std::process::id().to_le_bytes());

        Self(hasher.finalize().to_hex().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the ID is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
