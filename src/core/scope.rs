//! Carrying a logger through an operation
//!
//! A [`Scope`] is an explicit value handed down the call path of a request or
//! operation. Binding a logger produces a new scope and leaves the original
//! untouched; reading from a scope with nothing bound yields a default logger
//! on standard error.
//!
//! # Example
//!
//! ```
//! use rust_cli_logger::prelude::*;
//!
//! fn handle(scope: &Scope) {
//!     logger_from_scope(scope).info("handling", kv!["step", 1]);
//! }
//!
//! let sink = MemorySink::new();
//! let scope = bind_to_scope(&Scope::new(), Logger::new(sink.clone()).prefixed("req"));
//! handle(&scope);
//!
//! assert!(sink.contents().contains("INFO req: handling step=1"));
//! ```

use super::logger::Logger;

#[derive(Debug, Clone, Default)]
pub struct Scope {
    logger: Option<Logger>,
}

impl Scope {
    /// An empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this scope with `logger` bound
    #[must_use]
    pub fn with_logger(&self, logger: Logger) -> Scope {
        Scope {
            logger: Some(logger),
        }
    }

    /// The bound logger, or a default stderr logger if none is bound
    pub fn logger(&self) -> Logger {
        self.logger.clone().unwrap_or_else(Logger::stderr)
    }

    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }
}

/// Bind `logger` to a copy of `scope`
#[must_use]
pub fn bind_to_scope(scope: &Scope, logger: Logger) -> Scope {
    scope.with_logger(logger)
}

/// Get the logger bound to `scope`, falling back to a default stderr logger
pub fn logger_from_scope(scope: &Scope) -> Logger {
    scope.logger()
}
