//! TOML config store adapter

use std::fs;
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::FileConfig;
use crate::domain::error::ConfigError;

/// System-wide configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/readahead/readahead.toml";

/// Config store backed by a TOML file
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    /// Create a store for the system-wide config file
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_PATH)
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into FileConfig
    fn parse_toml(content: &str) -> Result<FileConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl Default for TomlConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<FileConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(FileConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
