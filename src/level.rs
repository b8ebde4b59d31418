use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Severity of a log call, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// Upper-case name as it appears in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Whether a line at this level is also copied to the `.err` stream.
    pub fn is_error(&self) -> bool {
        *self >= Self::Error
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    /// Parse a level name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

/// Level gate: accept `candidate` iff it is at least as severe as `configured`.
pub fn should_log(configured: LogLevel, candidate: LogLevel) -> bool {
    candidate >= configured
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    #[test]
    fn test_levels_are_totally_ordered() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_should_log_with_warning_minimum() {
        let accepted: Vec<_> = ALL
            .iter()
            .filter(|l| should_log(LogLevel::Warning, **l))
            .collect();
        assert_eq!(
            accepted,
            vec![&LogLevel::Warning, &LogLevel::Error, &LogLevel::Fatal]
        );
    }

    #[test]
    fn test_should_log_debug_accepts_everything() {
        assert!(ALL.iter().all(|l| should_log(LogLevel::Debug, *l)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" error ".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("fAtAl".parse::<LogLevel>().unwrap(), LogLevel::Fatal);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        for bad in ["", "trace", "warn", "critical"] {
            match bad.parse::<LogLevel>() {
                Err(Error::InvalidLevel(name)) => assert_eq!(name, bad),
                other => panic!("expected InvalidLevel for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in ALL {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_is_error_threshold() {
        assert!(!LogLevel::Warning.is_error());
        assert!(LogLevel::Error.is_error());
        assert!(LogLevel::Fatal.is_error());
    }
}
