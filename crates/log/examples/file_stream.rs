//! Demo: fan one event out to the console and a log file at once.

use std::fs::File;
use std::sync::Arc;

use anyhow::Result;
use lumen_log::{ConsoleObserver, Logger, Severity, WriterObserver, error, info};

fn main() -> Result<()> {
    let logger = Logger::new();
    logger.register(Arc::new(ConsoleObserver::from_env()));

    let file = File::create("demo.log")?;
    let file_observer = Arc::new(WriterObserver::new(file));
    logger.register(file_observer.clone());

    info!(logger, "both targets receive this");
    error!(logger, "and this, in the same order");
    logger.log(Severity::Debugging, "done");

    file_observer.writer().sync_all()?;
    Ok(())
}
