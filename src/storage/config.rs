//! Configuration handling for envars
//!
//! The global configuration lives in `config.toml` under the platform
//! config directory (`~/.config/envars/config.toml` on Linux). Its location
//! can be overridden with `ENVARS_CONFIG`.

use std::fs;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EnvarsError, Result};

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "ENVARS_CONFIG";

/// Output format, chosen with `--format` or `default_format`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Location of the project store (`~/` is expanded)
    pub store_path: Option<String>,

    /// Output format used when `--format` is not given
    pub default_format: Option<OutputFormat>,
}

/// Resolved configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::global_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(event = "config.missing", path = %path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| EnvarsError::io("Failed to read config", path, e))?;

        let global: GlobalConfig = toml::from_str(&content)
            .map_err(|e| EnvarsError::Config(format!("{}: {}", path.display(), e)))?;

        debug!(event = "config.loaded", path = %path.display());
        Ok(Self {
            global,
            source: Some(path.to_path_buf()),
        })
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "envars").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Default store location, `~/.envars/data.json`
    pub fn default_store_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(".envars").join("data.json"))
    }

    /// Resolves the store path: explicit override, then config, then default
    pub fn store_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        if let Some(configured) = &self.global.store_path {
            return expand_home(configured);
        }

        Self::default_store_path()
            .ok_or_else(|| EnvarsError::Config("could not determine home directory".to_string()))
    }
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(rest))
            .ok_or_else(|| EnvarsError::Config("could not determine home directory".to_string())),
        None => Ok(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_global_config() {
        let toml = r#"
store_path = "/tmp/envars/data.json"
default_format = "json"
"#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.store_path.as_deref(), Some("/tmp/envars/data.json"));
        assert_eq!(config.default_format, Some(OutputFormat::Json));
    }

    #[test]
    fn records_source_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_format = \"text\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(config.global.default_format, Some(OutputFormat::Text));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.global, GlobalConfig::default());
        assert!(config.source.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "store_path = [").unwrap();

        assert!(matches!(Config::load_from(&path), Err(EnvarsError::Config(_))));
    }

    #[test]
    fn explicit_store_path_wins() {
        let config = Config {
            global: GlobalConfig {
                store_path: Some("/from/config.json".to_string()),
                default_format: None,
            },
            source: None,
        };

        let path = config.store_path(Some(Path::new("/from/flag.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.json"));

        let path = config.store_path(None).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn default_store_path_is_under_home() {
        if let Some(path) = Config::default_store_path() {
            assert!(path.ends_with(".envars/data.json"));
        }
    }

    #[test]
    fn expands_home_prefix() {
        if let Some(dirs) = BaseDirs::new() {
            let expanded = expand_home("~/stores/data.json").unwrap();
            assert_eq!(expanded, dirs.home_dir().join("stores/data.json"));
        }
        assert_eq!(expand_home("/abs").unwrap(), PathBuf::from("/abs"));
    }
}
