//! Validated read-ahead settings shared by every verb

use std::num::{NonZeroU32, NonZeroU64};

use crate::domain::error::InvalidNumberError;

use super::duration::Duration;

/// Default upper bound on the number of files to read ahead
pub const DEFAULT_FILES_MAX: NonZeroU32 = match NonZeroU32::new(16 * 1024) {
    Some(n) => n,
    None => panic!("default files_max must be positive"),
};

/// Default upper bound on the size of a single file to read ahead (10 MiB)
pub const DEFAULT_FILE_SIZE_MAX: NonZeroU64 = match NonZeroU64::new(10 * 1024 * 1024) {
    Some(n) => n,
    None => panic!("default file_size_max must be positive"),
};

/// Settings handed to the engines.
///
/// Every field is strictly positive by construction, so a `Settings` value
/// is always valid once it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of files the collector may record
    pub files_max: NonZeroU32,
    /// Maximum size, in bytes, of a file considered for read-ahead
    pub file_size_max: NonZeroU64,
    /// Maximum time the collector may spend
    pub timeout: Duration,
}

impl Settings {
    /// Built-in defaults
    pub const fn defaults() -> Self {
        Self {
            files_max: DEFAULT_FILES_MAX,
            file_size_max: DEFAULT_FILE_SIZE_MAX,
            timeout: Duration::default_timeout(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Parse a strictly positive 32-bit count
pub fn parse_files_max(input: &str) -> Result<NonZeroU32, InvalidNumberError> {
    input
        .parse::<NonZeroU32>()
        .map_err(|_| InvalidNumberError {
            input: input.to_string(),
        })
}

/// Parse a strictly positive 64-bit byte size
pub fn parse_file_size_max(input: &str) -> Result<NonZeroU64, InvalidNumberError> {
    input
        .parse::<NonZeroU64>()
        .map_err(|_| InvalidNumberError {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let settings = Settings::defaults();
        assert_eq!(settings.files_max.get(), 16384);
        assert_eq!(settings.file_size_max.get(), 10 * 1024 * 1024);
        assert_eq!(settings.timeout.as_secs(), 120);
        assert_eq!(Settings::default(), settings);
    }

    #[test]
    fn files_max_accepts_positive() {
        assert_eq!(parse_files_max("100").unwrap().get(), 100);
        assert_eq!(parse_files_max("4294967295").unwrap().get(), u32::MAX);
    }

    #[test]
    fn files_max_rejects_zero_negative_and_garbage() {
        assert!(parse_files_max("0").is_err());
        assert!(parse_files_max("-1").is_err());
        assert!(parse_files_max("ten").is_err());
        assert!(parse_files_max("").is_err());
        assert!(parse_files_max("4294967296").is_err());
    }

    #[test]
    fn file_size_max_accepts_64_bit_values() {
        assert_eq!(
            parse_file_size_max("8589934592").unwrap().get(),
            8 * 1024 * 1024 * 1024
        );
    }

    #[test]
    fn file_size_max_rejects_zero_negative_and_garbage() {
        assert!(parse_file_size_max("0").is_err());
        assert!(parse_file_size_max("-4096").is_err());
        assert!(parse_file_size_max("10M").is_err());
    }

    #[test]
    fn parse_error_echoes_input() {
        let err = parse_files_max("abc").unwrap_err();
        assert_eq!(err.input, "abc");
    }
}
