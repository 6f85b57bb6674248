//! # lumen-log: minimal embeddable logging
//!
//! Callers emit timestamped, severity-classified events; every registered
//! observer receives each event synchronously, in registration order. The
//! crate is the whole pipeline: event construction, the severity taxonomy
//! (including caller-defined severities), and multi-observer fan-out.
//! What an observer does with an event it receives is its own concern.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use lumen_log::{info, ConsoleObserver, Logger, Severity};
//!
//! let logger = Logger::new();
//! logger.register(Arc::new(ConsoleObserver::new()));
//!
//! logger.log(Severity::Information, "Hello world.");
//! info!(logger, "listening on port {}", 8080);
//! ```
//!
//! There is no implicit global logger: the application owns its [`Logger`]
//! and hands it (or a reference) to whatever needs to log. Dispatch is
//! purely synchronous, with no internal threads or queues; a logging call
//! returns once every observer has.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod event;
pub mod format;
mod logger;
mod macros;
mod observer;
mod registry;
mod severity;

pub use event::{Event, EventBuilder, file_basename};
pub use logger::Logger;
pub use observer::{ColorMode, ConsoleObserver, Observer, WriterObserver};
pub use registry::Registry;
pub use severity::{CUSTOM_PLACEHOLDER, Severity};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ColorMode, ConsoleObserver, Event, EventBuilder, Logger, Observer, Severity,
        WriterObserver,
    };

    pub use crate::{custom, debug, error, fatal, info, log, warn};
}

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The observer table was created with a fixed capacity and is full.
    #[error("observer table is full (capacity {capacity})")]
    RegistryFull {
        /// The configured limit.
        capacity: usize,
    },
}

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;
