//! Logging macros
//!
//! The level macros check the level gate before building any attribute
//! values, so a disabled call costs one comparison.
//!
//! # Examples
//!
//! ```
//! use rust_cli_logger::prelude::*;
//! use rust_cli_logger::info;
//! use std::time::Duration;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone());
//!
//! info!(logger, "Server started");
//! info!(logger, "Listening"; "port", 8080, "timeout", Duration::from_secs(30));
//!
//! assert!(sink.contents().contains("Listening port=8080 timeout=30s"));
//! ```

/// Build an attribute slice from alternating keys and values.
///
/// Each element goes through `Value::from`, so mixed types are fine.
///
/// ```
/// use rust_cli_logger::{kv, Value};
///
/// let attrs: &[Value] = kv!["status", 200, "cached", true];
/// assert_eq!(attrs.len(), 4);
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        &[] as &[$crate::Value]
    };
    ($($v:expr),+ $(,)?) => {
        &[$($crate::Value::from($v)),+]
    };
}

/// Log a message at a given level, with optional attributes after `;`.
///
/// ```
/// # use rust_cli_logger::prelude::*;
/// # let logger = Logger::discard();
/// use rust_cli_logger::log;
/// log!(logger, Level::WARN, "Simple message");
/// log!(logger, Level::ERROR, format!("Error code: {}", 500); "retry", false);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr) => {
        $crate::log!($logger, $level, $msg;)
    };
    ($logger:expr, $level:expr, $msg:expr; $($kv:expr),* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, &$msg, $crate::kv![$($kv),*]);
        }
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use rust_cli_logger::prelude::*;
/// # let logger = Logger::discard();
/// use rust_cli_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter"; "value", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARN, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::style::{set_color_mode, ColorMode};
    use crate::core::{Level, Logger, Value};
    use crate::sinks::MemorySink;

    fn logger(level: Level) -> (Logger, MemorySink) {
        set_color_mode(ColorMode::Never);
        let sink = MemorySink::new();
        (Logger::builder(sink.clone()).level(level).build(), sink)
    }

    #[test]
    fn test_kv_macro() {
        let empty: &[Value] = kv![];
        assert!(empty.is_empty());

        let attrs: &[Value] = kv!["a", 1, "b", true,];
        assert_eq!(
            attrs,
            &[Value::from("a"), Value::Int(1), Value::from("b"), Value::Bool(true)]
        );
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger(Level::DEBUG);
        debug!(logger, "d");
        info!(logger, "i"; "k", "v");
        warn!(logger, String::from("w"));
        error!(logger, "e"; "code", 500,);

        let lines = sink.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("DEBUG: d"));
        assert!(lines[1].ends_with("INFO: i k=v"));
        assert!(lines[2].ends_with("WARN: w"));
        assert!(lines[3].ends_with("ERROR: e code=500"));
    }

    #[test]
    fn test_disabled_macro_skips_arguments() {
        let (logger, sink) = logger(Level::ERROR);
        let mut evaluated = false;
        info!(logger, "hidden"; "side", {
            evaluated = true;
            1
        });

        assert!(!evaluated);
        assert!(sink.is_empty());
    }
}
