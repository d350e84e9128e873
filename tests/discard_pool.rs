//! The discard sink never touches the shared line buffers
//!
//! Reads the process-wide buffer pool counters, so it lives in its own test
//! binary with a single test.

use rust_cli_logger::core::buffer_pool;
use rust_cli_logger::prelude::*;
use rust_cli_logger::{debug, error};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_discard_acquires_no_buffers() {
    let clock_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clock_calls);
    let logger = Logger::builder(std::io::sink())
        .level(Level::DEBUG)
        .clock(move || {
            counter.fetch_add(1, Ordering::Relaxed);
            chrono::Utc::now()
        })
        .build();

    let before = buffer_pool::global().stats().acquired();

    logger.debug("debug", kv!["k", 1]);
    logger.info("info", &[]);
    logger.warn("warn", kv!["odd"]);
    logger.error("error", kv!["sentence", "has spaces"]);

    let derived = logger.with(kv!["sub", true]).prefixed("child");
    derived.info("derived", kv!["k", "v"]);
    debug!(derived, "macro"; "n", 2);
    error!(logger, "macro");

    assert_eq!(buffer_pool::global().stats().acquired(), before);
    assert_eq!(clock_calls.load(Ordering::Relaxed), 0);
    assert_eq!(logger.metrics().lines_written(), 0);
    assert!(derived.is_discard());

    // An enabled logger on a real sink does take a buffer.
    set_color_mode(ColorMode::Never);
    Logger::new(MemorySink::new()).info("real", &[]);
    assert_eq!(buffer_pool::global().stats().acquired(), before + 1);
}
