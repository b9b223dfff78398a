//! Logging utilities for the bookcheck harness.
//!
//! This module provides a standardized approach to logging across all crates
//! in the harness. It includes functions for initializing the tracing
//! subscriber, with an optional rolling file layer so acceptance runs leave
//! an artifact behind.

use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// This function should be called at the start of the harness to set up
/// logging. It configures the tracing subscriber with the specified log level
/// and formats log messages with timestamps, log levels and targets.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// # Arguments
///
/// * `level` - The minimum log level to display.
pub fn init_with_level(level: Level) {
    // Default level for everything; RUST_LOG directives still win
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::from_level(level).into());

    // Use try_init to handle the case where a global default subscriber has already been set
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize logging with an additional daily-rolling file layer.
///
/// Returns the appender worker guard; the caller must keep it alive for the
/// duration of the run or buffered log lines are lost on exit.
///
/// # Arguments
///
/// * `level` - The minimum log level to display.
/// * `log_dir` - Directory the rolling log files are written to.
pub fn init_with_file(level: Level, log_dir: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::from_level(level).into());

    let file_appender = tracing_appender::rolling::daily(log_dir, "bookcheck.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {} (file: {})", level, log_dir);
        Some(guard)
    } else {
        None
    }
}
