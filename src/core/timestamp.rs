//! Timestamp formatting and time sources

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Arc;

/// A source of the current time.
///
/// Loggers call this once per emitted line. Override it to make output
/// deterministic.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The real UTC wall clock
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// A clock that always reports `instant`
pub fn fixed_clock(instant: DateTime<Utc>) -> Clock {
    Arc::new(move || instant)
}

/// Layout of the timestamp at the start of each line
///
/// # Examples
///
/// ```
/// use rust_cli_logger::TimeFormat;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2025, 4, 1, 13, 34, 3).unwrap();
/// assert_eq!(TimeFormat::Rfc3339.format(&t), "2025-04-01T13:34:03Z");
/// assert_eq!(TimeFormat::Kitchen.format(&t), "1:34PM");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// RFC 3339 to the second: `2025-04-01T13:34:03Z`
    #[default]
    Rfc3339,

    /// RFC 3339 with milliseconds: `2025-04-01T13:34:03.123Z`
    Rfc3339Millis,

    /// Wall clock time only: `1:34PM`
    Kitchen,

    /// `2025-04-01 13:34:03`
    DateTime,

    /// `13:34:03`
    TimeOnly,

    /// Unix timestamp in seconds: `1743514443`
    Unix,

    /// Unix timestamp in milliseconds: `1743514443123`
    UnixMillis,

    /// Any strftime pattern, e.g. `%d/%b/%Y:%H:%M:%S`
    Custom(String),
}

impl TimeFormat {
    /// Render `datetime` in this layout.
    ///
    /// A custom pattern chrono can't render falls back to RFC 3339 rather than
    /// failing; [`TimeFormat::validate`] catches those up front.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimeFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimeFormat::Rfc3339Millis => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimeFormat::Kitchen => datetime.format("%-I:%M%p").to_string(),
            TimeFormat::DateTime => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimeFormat::TimeOnly => datetime.format("%H:%M:%S").to_string(),
            TimeFormat::Unix => datetime.timestamp().to_string(),
            TimeFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimeFormat::Custom(pattern) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    return datetime.to_rfc3339_opts(SecondsFormat::Secs, true);
                }
                out
            }
        }
    }

    /// Reject custom patterns that are empty or not valid strftime.
    pub fn validate(&self) -> Result<()> {
        let TimeFormat::Custom(pattern) = self else {
            return Ok(());
        };

        if pattern.trim().is_empty() {
            return Err(LoggerError::config("time_format", "custom pattern is empty"));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "time_format",
                format!("invalid strftime pattern '{}'", pattern),
            ));
        }
        Ok(())
    }
}
