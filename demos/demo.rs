//! A dinner's worth of log lines at every level
//!
//! Run with: cargo run --example demo

use rust_cli_logger::prelude::*;
use std::thread;
use std::time::Duration;

fn main() {
    let logger = Logger::builder(std::io::stderr())
        .level(Level::DEBUG)
        .build();

    logger.debug(
        "Searing steak",
        kv!["cook", "rare", "temp", 42, "time", Duration::from_secs(120)],
    );
    pause();

    logger.info(
        "Choosing wine pairing",
        kv!["choices", ["merlot", "malbec", "rioja"]],
    );
    pause();

    logger.error("No malbec left!", &[]);
    pause();

    logger.warn("Falling back to second choice", kv!["fallback", "rioja"]);
    logger.info("Eating steak", kv!["cut", "sirloin", "enjoying", true]);
}

fn pause() {
    thread::sleep(Duration::from_millis(300));
}
