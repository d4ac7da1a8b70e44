//! Duration value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DurationParseError;

pub const USEC_PER_MSEC: u64 = 1_000;
pub const USEC_PER_SEC: u64 = 1_000_000;
pub const USEC_PER_MINUTE: u64 = 60 * USEC_PER_SEC;
pub const USEC_PER_HOUR: u64 = 60 * USEC_PER_MINUTE;
pub const USEC_PER_DAY: u64 = 24 * USEC_PER_HOUR;

/// Default collection timeout (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Value object representing a strictly positive time span.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    microseconds: u64,
}

impl Duration {
    /// Create a Duration from microseconds, rejecting zero
    pub const fn from_micros(us: u64) -> Option<Self> {
        if us == 0 {
            None
        } else {
            Some(Self { microseconds: us })
        }
    }

    /// Create a Duration from seconds, rejecting zero and overflow
    pub const fn from_secs(secs: u64) -> Option<Self> {
        match secs.checked_mul(USEC_PER_SEC) {
            Some(us) => Self::from_micros(us),
            None => None,
        }
    }

    /// Default collection timeout
    pub const fn default_timeout() -> Self {
        Self {
            microseconds: DEFAULT_TIMEOUT_SECS * USEC_PER_SEC,
        }
    }

    /// Get duration in whole seconds
    pub const fn as_secs(&self) -> u64 {
        self.microseconds / USEC_PER_SEC
    }

    /// Get duration in microseconds
    pub const fn as_micros(&self) -> u64 {
        self.microseconds
    }
}

fn unit_multiplier(unit: &str) -> Option<u64> {
    match unit {
        "us" | "usec" => Some(1),
        "ms" | "msec" => Some(USEC_PER_MSEC),
        "s" | "sec" | "second" | "seconds" => Some(USEC_PER_SEC),
        "m" | "min" | "minute" | "minutes" => Some(USEC_PER_MINUTE),
        "h" | "hr" | "hour" | "hours" => Some(USEC_PER_HOUR),
        "d" | "day" | "days" => Some(USEC_PER_DAY),
        _ => None,
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse a duration string into a Duration value object.
    /// A bare number is read as seconds; otherwise the input is a sequence
    /// of `<number><unit>` pairs, optionally separated by whitespace
    /// ("90s", "2min", "2m30s", "1h 30s", "500ms").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DurationParseError { input: s.to_string() };
        let input = s.trim().to_lowercase();

        if input.is_empty() {
            return Err(invalid());
        }

        if input.bytes().all(|b| b.is_ascii_digit()) {
            let secs: u64 = input.parse().map_err(|_| invalid())?;
            return Self::from_secs(secs).ok_or_else(invalid);
        }

        let mut total: u64 = 0;
        let mut rest = input.as_str();

        while !rest.is_empty() {
            rest = rest.trim_start();

            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                return Err(invalid());
            }
            let (number, tail) = rest.split_at(digits);

            let unit_len = tail.len()
                - tail
                    .trim_start_matches(|c: char| c.is_ascii_alphabetic())
                    .len();
            let (unit, tail) = tail.split_at(unit_len);

            let multiplier = unit_multiplier(unit).ok_or_else(invalid)?;
            let value: u64 = number.parse().map_err(|_| invalid())?;

            total = value
                .checked_mul(multiplier)
                .and_then(|us| total.checked_add(us))
                .ok_or_else(invalid)?;
            rest = tail;
        }

        Self::from_micros(total).ok_or_else(invalid)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (USEC_PER_DAY, "d"),
            (USEC_PER_HOUR, "h"),
            (USEC_PER_MINUTE, "min"),
            (USEC_PER_SEC, "s"),
            (USEC_PER_MSEC, "ms"),
            (1, "us"),
        ];

        let mut remaining = self.microseconds;
        let mut first = true;
        for (size, suffix) in parts {
            let count = remaining / size;
            if count == 0 {
                continue;
            }
            remaining %= size;
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", count, suffix)?;
            first = false;
        }
        Ok(())
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::default_timeout()
    }
}
