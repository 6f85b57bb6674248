//! The observer trait and the built-in observer implementations
//!
//! An observer is anything that wants to see every dispatched event. State
//! lives in the implementing struct (or in a closure's captures), so there
//! is no opaque context pointer to keep alive. What an observer does with
//! an event is its own concern; the core only guarantees it sees each one
//! exactly once, in registration order.

use std::io::{self, IsTerminal, Write};

use parking_lot::{Mutex, MutexGuard};

use crate::event::Event;
use crate::format;

/// A registered handler invoked with every dispatched event.
///
/// Implementations must be `Send + Sync`: two threads logging
/// simultaneously may invoke the same observer concurrently.
///
/// # Example
///
/// ```rust
/// use lumen_log::{Event, Observer};
///
/// struct Counter(std::sync::atomic::AtomicUsize);
///
/// impl Observer for Counter {
///     fn observe(&self, _event: &Event) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///     }
/// }
/// ```
pub trait Observer: Send + Sync {
    /// Called once per dispatched event.
    ///
    /// The event is borrowed for the duration of the call and must not be
    /// retained past it.
    fn observe(&self, event: &Event);
}

impl<F> Observer for F
where
    F: Fn(&Event) + Send + Sync,
{
    fn observe(&self, event: &Event) {
        self(event);
    }
}

/// When the console observer emits ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when stderr is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Color mode from the environment: `NO_COLOR` (any value) disables
    /// color, otherwise `LUMEN_LOG_COLOR` may be `always`, `never`, or
    /// `auto`.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }
        match std::env::var("LUMEN_LOG_COLOR").ok().as_deref() {
            Some("always") => Self::Always,
            Some("never") => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Observer that writes the canonical line to stderr, colored per severity
/// when the mode allows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver {
    color: ColorMode,
}

impl ConsoleObserver {
    /// Console observer with [`ColorMode::Auto`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Console observer honoring `NO_COLOR` / `LUMEN_LOG_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_color(ColorMode::from_env())
    }

    /// Console observer with an explicit color mode.
    #[must_use]
    pub fn with_color(color: ColorMode) -> Self {
        Self { color }
    }
}

impl Observer for ConsoleObserver {
    fn observe(&self, event: &Event) {
        let colored = match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stderr().is_terminal(),
        };
        let line = if colored {
            format::render_colored(event)
        } else {
            format::render(event)
        };
        // Fire-and-forget: a failed stderr write has nowhere to report.
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// Observer that writes the canonical line to any [`Write`] target.
///
/// The writer sits behind a mutex, so one value serves concurrent logging
/// threads. Useful for streams, files, and in-memory buffers:
///
/// ```rust
/// use std::sync::Arc;
/// use lumen_log::{Logger, Severity, WriterObserver};
///
/// let buffer = Arc::new(WriterObserver::new(Vec::new()));
/// let logger = Logger::new();
/// logger.register(buffer.clone());
/// logger.log(Severity::Information, "captured");
/// assert!(!buffer.writer().is_empty());
/// ```
#[derive(Debug)]
pub struct WriterObserver<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterObserver<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Lock and expose the underlying writer, e.g. to inspect a captured
    /// buffer or flush a file.
    pub fn writer(&self) -> MutexGuard<'_, W> {
        self.writer.lock()
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Observer for WriterObserver<W> {
    fn observe(&self, event: &Event) {
        let _ = writeln!(self.writer.lock(), "{}", format::render(event));
    }
}
