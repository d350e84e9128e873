//! Serializable logger configuration
//!
//! `LoggerConfig` is the declarative counterpart of [`LoggerBuilder`]: it can
//! be loaded from JSON, checked with [`LoggerConfig::validate`] and turned
//! into a logger for any sink.
//!
//! [`LoggerBuilder`]: super::logger::LoggerBuilder

use super::error::{LoggerError, Result};
use super::level::Level;
use super::logger::Logger;
use super::style::{set_color_mode, ColorMode};
use super::timestamp::TimeFormat;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// # Examples
///
/// ```
/// use rust_cli_logger::{Level, LoggerConfig, TimeFormat};
///
/// let config = LoggerConfig::from_json(
///     r#"{"level": "debug", "time_format": "Kitchen", "prefix": "build"}"#,
/// ).unwrap();
///
/// assert_eq!(config.level, Level::DEBUG);
/// assert_eq!(config.time_format, TimeFormat::Kitchen);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level written
    pub level: Level,
    pub time_format: TimeFormat,
    pub prefix: Option<String>,
    /// Process-wide styling, applied by [`LoggerConfig::build`]
    pub color: ColorMode,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.level.is_known() {
            return Err(LoggerError::config(
                "level",
                format!("unknown level value {}", self.level.value()),
            ));
        }

        self.time_format.validate()?;

        if let Some(prefix) = &self.prefix {
            if prefix.chars().any(|c| c.is_whitespace() || c == ':') {
                return Err(LoggerError::config(
                    "prefix",
                    format!("'{}' must not contain whitespace or ':'", prefix),
                ));
            }
        }

        Ok(())
    }

    /// Validate, apply the colour mode, and build a logger on `sink`.
    pub fn build<W: Write + Send + 'static>(&self, sink: W) -> Result<Logger> {
        self.validate()?;
        set_color_mode(self.color);
        Ok(Logger::builder(sink).from_config(self).build())
    }
}
