//! Configuration port interface

use std::path::PathBuf;

use crate::domain::config::FileConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
pub trait ConfigStore {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (all fields None if the file doesn't exist)
    fn load(&self) -> Result<FileConfig, ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;
}
