//! Configuration storage adapters

mod toml_store;

pub use toml_store::{TomlConfigStore, DEFAULT_CONFIG_PATH};
