//! # Rust CLI Logger
//!
//! A leveled, human-readable logger for command line programs.
//!
//! Lines are semi-structured, with attributes written as `key=value`, and
//! styled for the terminal when styling is enabled:
//!
//! ```text
//! 2025-04-01T13:34:03Z INFO http: Response from get repos status=200 duration=500ms
//! ```
//!
//! ## Features
//!
//! - **Cheap when off**: disabled levels and discard sinks cost one comparison
//! - **Thread safe**: a logger and everything derived from it share one lock
//! - **Low allocation**: lines are built in pooled buffers
//! - **Layered context**: `with` adds persistent attributes, `prefixed` labels
//!   a subsystem
//!
//! ```
//! use rust_cli_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder(sink.clone()).level(Level::DEBUG).build();
//! let http = logger.prefixed("http");
//!
//! http.info("Response from get repos", kv!["status", 200]);
//! assert!(sink.contents().contains("INFO http: Response from get repos status=200"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        bind_to_scope, logger_from_scope, set_color_mode, ColorMode, Level, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Scope, TimeFormat,
        Value,
    };
    pub use crate::kv;
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use crate::core::{
    bind_to_scope, fixed_clock, logger_from_scope, set_color_mode, should_emit, system_clock,
    BufferPool, Clock, ColorMode, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, PoolStats, PooledBuffer, Result, Scope, StyleRole, TimeFormat, Value,
    MISSING_VALUE,
};
pub use sinks::{FileSink, MemorySink};
