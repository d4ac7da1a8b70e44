//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid duration: \"{input}\". Expected a positive number of seconds or <number><unit> pairs (e.g., 30, 90s, 2min, 1h 30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when a count or size is not a strictly positive integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value: \"{input}\". Expected a positive integer")]
pub struct InvalidNumberError {
    pub input: String,
}

/// Error when the verb token names none of the known verbs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown verb {input}.")]
pub struct InvalidVerbError {
    pub input: String,
}

/// Error when loading or validating the configuration file
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
