//! Prefixed loggers sharing one sink
//!
//! Run with: cargo run --example prefix

use rust_cli_logger::prelude::*;
use rust_cli_logger::{error, info, warn};
use std::time::Duration;

fn main() -> Result<()> {
    let config = LoggerConfig::from_json(r#"{"time_format": "Kitchen"}"#)?;
    let logger = config.build(std::io::stderr())?;
    let prefixed = logger.prefixed("http");

    info!(logger, "Calling GitHub API"; "url", "https://api.github.com/");
    warn!(prefixed, "Slow endpoint"; "endpoint", "users/slow", "duration", Duration::from_secs(10));
    info!(prefixed, "Response from get repos"; "status", 200, "duration", Duration::from_millis(500));
    error!(prefixed, "Response from something else"; "status", 400, "duration", Duration::from_millis(33));

    let scope = bind_to_scope(&Scope::new(), prefixed);
    logger_from_scope(&scope).info("Done", kv!["lines", logger.metrics().lines_written()]);

    Ok(())
}
