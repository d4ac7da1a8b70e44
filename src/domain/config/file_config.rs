//! Configuration file value object

use std::num::{NonZeroU32, NonZeroU64};

use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, InvalidNumberError};

use super::duration::Duration;
use super::settings::Settings;

/// Settings read from the configuration file.
/// All fields are optional to support partial configs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub files_max: Option<u64>,
    pub file_size_max: Option<u64>,
    pub timeout: Option<TimeoutValue>,
}

/// Timeout as written in the file: a bare number of seconds or a duration string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeoutValue {
    Seconds(u64),
    Text(String),
}

impl TimeoutValue {
    fn to_duration(&self) -> Result<Duration, ConfigError> {
        let parsed = match self {
            Self::Seconds(secs) => secs.to_string().parse::<Duration>(),
            Self::Text(text) => text.parse::<Duration>(),
        };
        parsed.map_err(|e| ConfigError::ValidationError {
            key: "timeout".to_string(),
            message: e.to_string(),
        })
    }
}

impl FileConfig {
    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Overlay the values set in this file on top of `base`.
    ///
    /// Values are validated with the same rules as the command line;
    /// the first invalid one fails the whole overlay.
    pub fn apply(&self, base: Settings) -> Result<Settings, ConfigError> {
        let mut settings = base;

        if let Some(files_max) = self.files_max {
            settings.files_max = u32::try_from(files_max)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| not_positive("files_max", files_max))?;
        }

        if let Some(file_size_max) = self.file_size_max {
            settings.file_size_max = NonZeroU64::new(file_size_max)
                .ok_or_else(|| not_positive("file_size_max", file_size_max))?;
        }

        if let Some(ref timeout) = self.timeout {
            settings.timeout = timeout.to_duration()?;
        }

        Ok(settings)
    }
}

fn not_positive(key: &str, value: u64) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: InvalidNumberError {
            input: value.to_string(),
        }
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keeps_base() {
        let base = Settings::defaults();
        assert_eq!(FileConfig::empty().apply(base).unwrap(), base);
    }

    #[test]
    fn apply_overrides_set_fields_only() {
        let config = FileConfig {
            files_max: Some(8192),
            timeout: Some(TimeoutValue::Text("90s".to_string())),
            ..Default::default()
        };

        let settings = config.apply(Settings::defaults()).unwrap();
        assert_eq!(settings.files_max.get(), 8192);
        assert_eq!(settings.file_size_max, Settings::defaults().file_size_max);
        assert_eq!(settings.timeout.as_secs(), 90);
    }

    #[test]
    fn apply_rejects_zero() {
        let config = FileConfig {
            file_size_max: Some(0),
            ..Default::default()
        };

        let err = config.apply(Settings::defaults()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref key, .. } if key == "file_size_max"
        ));
    }

    #[test]
    fn apply_rejects_files_max_out_of_range() {
        let config = FileConfig {
            files_max: Some(u64::from(u32::MAX) + 1),
            ..Default::default()
        };
        assert!(config.apply(Settings::defaults()).is_err());
    }

    #[test]
    fn timeout_accepts_integer_seconds() {
        let config = FileConfig {
            timeout: Some(TimeoutValue::Seconds(45)),
            ..Default::default()
        };
        assert_eq!(config.apply(Settings::defaults()).unwrap().timeout.as_secs(), 45);

        let zero = FileConfig {
            timeout: Some(TimeoutValue::Seconds(0)),
            ..Default::default()
        };
        assert!(zero.apply(Settings::defaults()).is_err());
    }

    #[test]
    fn apply_rejects_bad_timeout() {
        let config = FileConfig {
            timeout: Some(TimeoutValue::Text("soon".to_string())),
            ..Default::default()
        };

        let err = config.apply(Settings::defaults()).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }
}
