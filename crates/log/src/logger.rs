//! The caller-owned logging handle
//!
//! A [`Logger`] pairs the event builder with an observer [`Registry`].
//! It is an explicit value the application owns and passes where logging
//! is needed; there is no process-wide implicit instance. Logging calls
//! never fail from the caller's perspective: an event is built and
//! fanned out, then forgotten.

use std::panic::Location;
use std::sync::Arc;

use crate::event::{Event, file_basename};
use crate::observer::Observer;
use crate::registry::Registry;
use crate::severity::Severity;
use crate::Result;

/// Entry point for emitting events and registering observers.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use lumen_log::{Logger, Severity, WriterObserver};
///
/// let logger = Logger::new();
/// let sink = Arc::new(WriterObserver::new(Vec::new()));
/// logger.register(sink.clone());
///
/// logger.log(Severity::Information, "hello");
/// let captured = String::from_utf8(sink.writer().clone()).unwrap();
/// assert!(captured.trim_end().ends_with("Information: hello"));
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    registry: Registry,
}

impl Logger {
    /// Logger with an unbounded observer table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Logger whose observer table holds at most `capacity` observers.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: Registry::bounded(capacity),
        }
    }

    /// Append an observer. `false` only when a capacity limit is
    /// exhausted; callers may drop the observer or retry after raising
    /// the limit.
    pub fn register(&self, observer: Arc<dyn Observer>) -> bool {
        self.registry.register(observer)
    }

    /// [`register`](Self::register) in `Result` form.
    ///
    /// # Errors
    ///
    /// [`crate::Error::RegistryFull`] when the table is at capacity.
    pub fn try_register(&self, observer: Arc<dyn Observer>) -> Result<()> {
        self.registry.try_register(observer)
    }

    /// Number of currently registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.registry.observer_count()
    }

    /// Log `message` at `severity`, capturing the calling file and line
    /// automatically.
    ///
    /// The captured file is reduced to its basename. The function scope is
    /// not available here; use the [`log!`](crate::log) family of macros
    /// to attach it.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        let location = Location::caller();
        self.emit(
            severity,
            Some(message.into()),
            None,
            Some(location.file()),
            location.line(),
        );
    }

    /// Log at a custom severity. Both the name and the message may be
    /// absent: an unnamed custom severity renders with the placeholder
    /// label, an absent message renders empty.
    #[track_caller]
    pub fn log_custom(&self, name: Option<&str>, message: Option<&str>) {
        let location = Location::caller();
        self.emit(
            Severity::Custom(name.map(str::to_owned)),
            message.map(str::to_owned),
            None,
            Some(location.file()),
            location.line(),
        );
    }

    /// Build an event from parts and dispatch it.
    ///
    /// This is the full form behind [`log`](Self::log) and the macros:
    /// every call-site field is optional, `line` 0 means "unknown", and a
    /// file path is reduced to its basename. Holds no state between calls
    /// and returns once every observer has.
    pub fn emit(
        &self,
        severity: Severity,
        message: Option<String>,
        function: Option<&str>,
        file: Option<&str>,
        line: u32,
    ) {
        let mut builder = Event::builder(severity).line(line);
        if let Some(message) = message {
            builder = builder.message(message);
        }
        if let Some(function) = function {
            builder = builder.function(function);
        }
        if let Some(file) = file {
            builder = builder.file(file_basename(file));
        }
        self.dispatch(&builder.build());
    }

    /// Fan an already-built event out to every registered observer.
    pub fn dispatch(&self, event: &Event) {
        self.registry.dispatch(event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    fn capture(logger: &Logger) -> Arc<Mutex<Vec<Event>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        logger.register(Arc::new(move |event: &Event| {
            sink.lock().expect("capture lock").push(event.clone());
        }));
        seen
    }

    #[test]
    fn log_captures_call_site_file_and_line() {
        let logger = Logger::new();
        let seen = capture(&logger);

        logger.log(Severity::Information, "hello");

        let events = seen.lock().expect("capture lock");
        let event = &events[0];
        assert_eq!(event.message(), Some("hello"));
        assert_eq!(event.file(), Some("logger.rs"));
        assert_ne!(event.line(), 0);
        assert_eq!(event.function(), None);
    }

    #[test]
    fn log_custom_accepts_absent_name_and_message() {
        let logger = Logger::new();
        let seen = capture(&logger);

        logger.log_custom(None, None);
        logger.log_custom(Some("Audit"), Some("payload"));

        let events = seen.lock().expect("capture lock");
        assert_eq!(events[0].severity().label(), "Custom");
        assert_eq!(events[0].message(), None);
        assert_eq!(events[1].severity().label(), "Audit");
        assert_eq!(events[1].custom_severity_name(), Some("Audit"));
        assert_eq!(events[1].message(), Some("payload"));
    }

    #[test]
    fn emit_strips_file_paths_to_basenames() {
        let logger = Logger::new();
        let seen = capture(&logger);

        logger.emit(
            Severity::Debugging,
            None,
            Some("pkg::module::run"),
            Some("src/deep/nested/module.rs"),
            99,
        );

        let events = seen.lock().expect("capture lock");
        assert_eq!(events[0].file(), Some("module.rs"));
        assert_eq!(events[0].function(), Some("pkg::module::run"));
        assert_eq!(events[0].line(), 99);
    }

    #[test]
    fn capacity_surfaces_through_the_logger() {
        let logger = Logger::with_capacity(1);
        assert!(logger.register(Arc::new(|_: &Event| {})));
        assert!(!logger.register(Arc::new(|_: &Event| {})));
        assert_eq!(logger.observer_count(), 1);
    }
}
