//! Demo: caller-defined severities next to the fixed taxonomy.

use std::sync::Arc;

use lumen_log::{ConsoleObserver, Logger, Severity, custom};

fn main() {
    let logger = Logger::new();
    logger.register(Arc::new(ConsoleObserver::from_env()));

    custom!(logger, "Audit", "login accepted for uid {}", 1000);
    custom!(logger, "Heartbeat");

    // An unnamed custom severity renders with the "Custom" placeholder.
    logger.log_custom(None, Some("unnamed but still delivered"));

    // Numeric levels round-trip for bindings that only carry an integer.
    let severity = Severity::from_level(3);
    logger.log(severity, "reconstructed from level 3");
}
