//! Persistent attributes with `Logger::with`
//!
//! Run with: cargo run --example keys

use rust_cli_logger::prelude::*;
use std::time::Duration;

fn main() {
    let logger = Logger::builder(std::io::stderr())
        .level(Level::DEBUG)
        .build();

    logger.info(
        "Doing something",
        kv!["cache", true, "duration", Duration::from_secs(30), "number", 42],
    );

    let sub = logger.with(kv!["sub", true]);
    sub.info("Hello from the sub logger", kv!["subkey", "yes"]);
}
