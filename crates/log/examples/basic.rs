//! Minimal demo: one console observer, a few events.
//!
//! Run with `cargo run --example basic`; set `LUMEN_LOG_COLOR=never` (or
//! `NO_COLOR=1`) to strip the ANSI colors.

use std::sync::Arc;

use lumen_log::{ConsoleObserver, Logger, Severity, info, warn};

fn main() {
    let logger = Logger::new();
    logger.register(Arc::new(ConsoleObserver::from_env()));

    logger.log(Severity::Information, "Hello world.");

    // The macros additionally capture the module scope.
    info!(logger, "listening on port {}", 8080);
    warn!(logger, "retrying in {}ms", 250);
    logger.log_custom(Some("Audit"), Some("demo session started"));
}
