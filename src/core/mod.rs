//! Core logger types

pub mod attribute;
pub mod buffer_pool;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod scope;
pub mod style;
pub mod timestamp;
pub mod value;

pub use buffer_pool::{BufferPool, PoolStats, PooledBuffer};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use level::{should_emit, Level};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use scope::{bind_to_scope, logger_from_scope, Scope};
pub use style::{set_color_mode, ColorMode, StyleRole};
pub use timestamp::{fixed_clock, system_clock, Clock, TimeFormat};
pub use value::{Value, MISSING_VALUE};
