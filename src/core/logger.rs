//! The logger
//!
//! A [`Logger`] writes one human-readable line per call:
//!
//! ```text
//! <timestamp> <LEVEL>[ <prefix>]: <message>[ <key>=<value>]*
//! ```
//!
//! Cloning a logger, or deriving one with [`Logger::with`] or
//! [`Logger::prefixed`], copies its level, prefix and attributes but shares
//! the sink and the lock around it, so lines from a whole family of loggers
//! never interleave.

use super::{
    attribute,
    buffer_pool,
    config::LoggerConfig,
    level::{self, Level},
    metrics::LoggerMetrics,
    style::{paint, StyleRole},
    timestamp::{system_clock, Clock, TimeFormat},
    value::Value,
};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::any::TypeId;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// The output sink and its lock, one allocation shared by a logger family
type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// A leveled command line logger. Safe to share and clone across threads.
///
/// # Example
///
/// ```
/// use rust_cli_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder(sink.clone()).level(Level::DEBUG).build();
///
/// logger.debug("Searing steak", kv!["cook", "rare", "temp", 42]);
/// assert!(sink.contents().contains("Searing steak cook=rare temp=42"));
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: SharedSink,
    clock: Clock,
    time_format: TimeFormat,
    level: Level,
    prefix: String,
    kv: Arc<[Value]>,
    is_discard: bool,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// A logger writing to `sink` with default settings: level `INFO`,
    /// RFC 3339 timestamps from the UTC clock and no prefix.
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self::builder(sink).build()
    }

    #[must_use]
    pub fn builder<W: Write + Send + 'static>(sink: W) -> LoggerBuilder {
        LoggerBuilder::new(sink)
    }

    /// A default logger on standard error.
    ///
    /// Automatic styling follows stdout, so set [`ColorMode::Never`] when
    /// stderr may be redirected to a file.
    ///
    /// [`ColorMode::Never`]: super::style::ColorMode::Never
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// A logger that drops everything without formatting it
    pub fn discard() -> Self {
        Self::new(io::sink())
    }

    /// Whether a line at `level` would be written
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        !self.is_discard && level::should_emit(self.level, level)
    }

    #[inline]
    pub fn debug(&self, msg: &str, kv: &[Value]) {
        self.log(Level::DEBUG, msg, kv);
    }

    #[inline]
    pub fn info(&self, msg: &str, kv: &[Value]) {
        self.log(Level::INFO, msg, kv);
    }

    #[inline]
    pub fn warn(&self, msg: &str, kv: &[Value]) {
        self.log(Level::WARN, msg, kv);
    }

    #[inline]
    pub fn error(&self, msg: &str, kv: &[Value]) {
        self.log(Level::ERROR, msg, kv);
    }

    /// Write a line at `level`.
    ///
    /// Disabled levels and the discard sink return before touching the
    /// buffer pool, the clock or the lock. Sink errors are counted in
    /// [`Logger::metrics`] and otherwise ignored.
    pub fn log(&self, level: Level, msg: &str, kv: &[Value]) {
        if !self.enabled(level) {
            return;
        }

        let mut buf = buffer_pool::global().acquire();
        self.format_line(&mut buf, level, msg, kv);
        self.write_line(&buf);
    }

    fn format_line(&self, buf: &mut String, level: Level, msg: &str, kv: &[Value]) {
        let timestamp = self.time_format.format(&(self.clock)());
        buf.push_str(&paint(StyleRole::Timestamp, &timestamp));
        buf.push(' ');
        buf.push_str(&paint(StyleRole::Level(level), level.to_str()));
        if !self.prefix.is_empty() {
            buf.push(' ');
            buf.push_str(&paint(StyleRole::Prefix, &self.prefix));
        }
        buf.push_str(": ");
        buf.push_str(msg);
        attribute::write_attributes(buf, &self.kv, kv);
        buf.push('\n');
    }

    fn write_line(&self, line: &str) {
        let result = {
            let mut sink = self.sink.lock();
            sink.write_all(line.as_bytes()).and_then(|()| sink.flush())
        };

        match result {
            Ok(()) => self.metrics.record_written(line.len()),
            Err(_) => {
                self.metrics.record_write_failure();
            }
        }
    }

    /// A logger that also writes `kv` on every line, after this logger's own
    /// attributes.
    #[must_use]
    pub fn with(&self, kv: &[Value]) -> Logger {
        let mut sub = self.clone();
        sub.kv = self.kv.iter().chain(kv).cloned().collect();
        sub
    }

    /// A logger with its prefix replaced by `prefix`
    #[must_use]
    pub fn prefixed(&self, prefix: impl Into<String>) -> Logger {
        let mut sub = self.clone();
        sub.prefix = prefix.into();
        sub
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    /// Persistent attributes, as a flat key/value list
    pub fn attributes(&self) -> &[Value] {
        &self.kv
    }

    pub fn is_discard(&self) -> bool {
        self.is_discard
    }

    /// Whether both loggers write through the same sink and lock
    pub fn shares_sink_with(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }

    /// Counters shared by this logger and all loggers derived from it
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .field("time_format", &self.time_format)
            .field("attributes", &self.kv)
            .field("is_discard", &self.is_discard)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use rust_cli_logger::prelude::*;
/// use chrono::{TimeZone, Utc};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder(sink.clone())
///     .level(Level::DEBUG)
///     .time_format(TimeFormat::Kitchen)
///     .clock(|| Utc.with_ymd_and_hms(2025, 4, 1, 13, 34, 3).unwrap())
///     .prefix("oven")
///     .build();
///
/// logger.debug("Preheating", &[]);
/// assert_eq!(sink.contents(), "1:34PM DEBUG oven: Preheating\n");
/// ```
pub struct LoggerBuilder {
    sink: SharedSink,
    is_discard: bool,
    level: Level,
    time_format: TimeFormat,
    clock: Clock,
    prefix: String,
}

impl LoggerBuilder {
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        let is_discard = TypeId::of::<W>() == TypeId::of::<io::Sink>();
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
            is_discard,
            level: Level::INFO,
            time_format: TimeFormat::default(),
            clock: system_clock(),
            prefix: String::new(),
        }
    }

    /// Set the minimum level that is written
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Replace the time source, e.g. with a fixed instant for tests
    #[must_use = "builder methods return a new value"]
    pub fn clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Take level, time format and prefix from `config`
    #[must_use = "builder methods return a new value"]
    pub fn from_config(mut self, config: &LoggerConfig) -> Self {
        self.level = config.level;
        self.time_format = config.time_format.clone();
        self.prefix = config.prefix.clone().unwrap_or_default();
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            sink: self.sink,
            clock: self.clock,
            time_format: self.time_format,
            level: self.level,
            prefix: self.prefix,
            kv: Arc::from(Vec::new()),
            is_discard: self.is_discard,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}
