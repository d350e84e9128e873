//! Log level definitions and the level gate

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
///
/// Levels are plain integers with gaps between the named ones so a new level
/// can slot in later without renumbering. Any integer is a valid `Level`;
/// values other than the four named ones order normally but render as
/// `unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(i32);

impl Level {
    /// Verbose output for `--debug` style modes
    pub const DEBUG: Level = Level(-4);
    /// Progress updates, the default level
    pub const INFO: Level = Level(0);
    /// Recoverable problems worth flagging to the user
    pub const WARN: Level = Level(4);
    /// Non-recoverable errors
    pub const ERROR: Level = Level(8);

    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this is one of the four named levels
    pub const fn is_known(self) -> bool {
        matches!(self.0, -4 | 0 | 4 | 8)
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Level::DEBUG => "DEBUG",
            Level::INFO => "INFO",
            Level::WARN => "WARN",
            Level::ERROR => "ERROR",
            _ => "unknown",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_str().to_string()
    }
}

impl TryFrom<String> for Level {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Level::DEBUG),
            "INFO" => Ok(Level::INFO),
            "WARN" | "WARNING" => Ok(Level::WARN),
            "ERROR" => Ok(Level::ERROR),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

/// Returns true iff a line at `attempted` passes a logger configured at
/// `configured`.
#[inline]
pub fn should_emit(configured: Level, attempted: Level) -> bool {
    attempted >= configured
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Level; 4] = [Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR];

    #[test]
    fn test_level_ordering() {
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARN);
        assert!(Level::WARN < Level::ERROR);
        assert_eq!(Level::default(), Level::INFO);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(Level::DEBUG.to_string(), "DEBUG");
        assert_eq!(Level::INFO.to_string(), "INFO");
        assert_eq!(Level::WARN.to_string(), "WARN");
        assert_eq!(Level::ERROR.to_string(), "ERROR");
    }

    #[test]
    fn test_unknown_level_renders_unknown() {
        let odd = Level::new(2);
        assert!(!odd.is_known());
        assert_eq!(odd.to_string(), "unknown");
        assert!(odd > Level::INFO && odd < Level::WARN);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::DEBUG);
        assert_eq!("Info".parse::<Level>().unwrap(), Level::INFO);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::WARN);
        assert_eq!(" ERROR ".parse::<Level>().unwrap(), Level::ERROR);
        assert!("trace".parse::<Level>().is_err());
    }

    #[test]
    fn test_should_emit_matrix() {
        for configured in ALL {
            for attempted in ALL {
                assert_eq!(
                    should_emit(configured, attempted),
                    attempted.value() >= configured.value(),
                    "configured={configured} attempted={attempted}"
                );
            }
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Level::WARN).expect("serialize");
        assert_eq!(json, "\"WARN\"");

        let level: Level = serde_json::from_str("\"debug\"").expect("deserialize");
        assert_eq!(level, Level::DEBUG);

        assert!(serde_json::from_str::<Level>("\"verbose\"").is_err());
    }
}
