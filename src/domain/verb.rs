//! Verb value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidVerbError;

/// All available verbs
pub const ALL_VERBS: &[Verb] = &[Verb::Collect, Verb::Replay, Verb::Analyze];

/// Operation mode selected by the first positional argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Record which files are read during early boot
    Collect,
    /// Prefetch the files recorded by a previous collect
    Replay,
    /// Inspect a recorded pack file
    Analyze,
}

impl Verb {
    /// Get the string identifier for this verb
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Collect => "collect",
            Self::Replay => "replay",
            Self::Analyze => "analyze",
        }
    }
}

impl FromStr for Verb {
    type Err = InvalidVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collect" => Ok(Self::Collect),
            "replay" => Ok(Self::Replay),
            "analyze" => Ok(Self::Analyze),
            _ => Err(InvalidVerbError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_verbs() {
        assert_eq!("collect".parse::<Verb>().unwrap(), Verb::Collect);
        assert_eq!("replay".parse::<Verb>().unwrap(), Verb::Replay);
        assert_eq!("analyze".parse::<Verb>().unwrap(), Verb::Analyze);
    }

    #[test]
    fn parse_is_exact() {
        assert!("Collect".parse::<Verb>().is_err());
        assert!(" replay".parse::<Verb>().is_err());
        assert!("analyse".parse::<Verb>().is_err());
    }

    #[test]
    fn unknown_verb_message() {
        let err = "foobar".parse::<Verb>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown verb foobar.");
    }

    #[test]
    fn round_trips_through_display() {
        for verb in ALL_VERBS {
            assert_eq!(verb.to_string().parse::<Verb>().unwrap(), *verb);
        }
    }
}
