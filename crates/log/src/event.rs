//! The immutable event record passed to observers
//!
//! An [`Event`] is constructed once per log call, handed to every
//! registered observer by reference, and discarded when dispatch returns.
//! The core never retains it. All call-site fields are optional: absent
//! values are omitted by downstream formatting, never an error.

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::severity::Severity;

/// A single timestamped, severity-classified log event.
///
/// Events are immutable: fields are set at construction (directly or via
/// [`EventBuilder`]) and exposed read-only. The timestamp is captured once,
/// so dispatching the same event twice produces byte-identical renderings.
///
/// # Example
///
/// ```rust
/// use lumen_log::{Event, Severity};
///
/// let event = Event::new(Severity::Information, "hello");
/// assert_eq!(event.severity().label(), "Information");
/// assert_eq!(event.message(), Some("hello"));
/// assert_eq!(event.line(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    severity: Severity,
    timestamp: OffsetDateTime,
    function: Option<String>,
    file: Option<String>,
    line: u32,
    message: Option<String>,
}

impl Event {
    /// Build an event with the current time and no call-site metadata.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        EventBuilder::new(severity).message(message).build()
    }

    /// Start building an event field by field.
    #[must_use]
    pub fn builder(severity: Severity) -> EventBuilder {
        EventBuilder::new(severity)
    }

    /// Severity of this event.
    #[must_use]
    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    /// Name of the custom severity, when [`severity`](Self::severity) is
    /// [`Severity::Custom`] with a name. `None` for every other severity.
    #[must_use]
    pub fn custom_severity_name(&self) -> Option<&str> {
        match &self.severity {
            Severity::Custom(Some(name)) => Some(name),
            _ => None,
        }
    }

    /// Instant the event was constructed.
    #[must_use]
    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Timestamp as nanoseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_nanos(&self) -> i128 {
        self.timestamp.unix_timestamp_nanos()
    }

    /// Function (or module) scope captured at the call site.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Source file name captured at the call site.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Source line captured at the call site; 0 means "unknown".
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Log message. Absence is valid and renders as empty.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3
            + usize::from(self.custom_severity_name().is_some())
            + usize::from(self.function.is_some())
            + usize::from(self.file.is_some())
            + usize::from(self.line != 0)
            + usize::from(self.message.is_some());

        let mut state = serializer.serialize_struct("Event", len)?;
        state.serialize_field("severity", &self.severity)?;
        if let Some(name) = self.custom_severity_name() {
            state.serialize_field("custom_severity_name", name)?;
        }
        state.serialize_field("timestamp", &crate::format::timestamp(self))?;
        state.serialize_field("timestamp_ns", &self.timestamp_nanos())?;
        if let Some(function) = &self.function {
            state.serialize_field("function", function)?;
        }
        if let Some(file) = &self.file {
            state.serialize_field("file", file)?;
        }
        if self.line != 0 {
            state.serialize_field("line", &self.line)?;
        }
        if let Some(message) = &self.message {
            state.serialize_field("message", message)?;
        }
        state.end()
    }
}

/// Builder for [`Event`] giving full control over every field.
///
/// Used by the logging macros and by bindings that carry their own
/// call-site metadata. The timestamp defaults to "now" but can be pinned,
/// which keeps repeated renderings of one event identical.
#[derive(Debug)]
pub struct EventBuilder {
    severity: Severity,
    timestamp: Option<OffsetDateTime>,
    function: Option<String>,
    file: Option<String>,
    line: u32,
    message: Option<String>,
}

impl EventBuilder {
    fn new(severity: Severity) -> Self {
        Self {
            severity,
            timestamp: None,
            function: None,
            file: None,
            line: 0,
            message: None,
        }
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the function (or module) scope.
    #[must_use]
    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Set the source file. Stored verbatim; use [`file_basename`] first if
    /// the value is a full path.
    #[must_use]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the source line. 0 keeps the "unknown" sentinel.
    #[must_use]
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Pin the timestamp instead of capturing "now" at build time.
    #[must_use]
    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Finish the event, capturing the current time unless one was pinned.
    #[must_use]
    pub fn build(self) -> Event {
        Event {
            severity: self.severity,
            timestamp: self.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
            function: self.function,
            file: self.file,
            line: self.line,
            message: self.message,
        }
    }
}

/// Final component of a source path, as captured by `file!()` or
/// `Location::caller()`. Falls back to the input when there is no clean
/// file name.
#[must_use]
pub fn file_basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_fields_default_to_none_and_zero() {
        let event = Event::builder(Severity::Warning).build();
        assert_eq!(event.message(), None);
        assert_eq!(event.function(), None);
        assert_eq!(event.file(), None);
        assert_eq!(event.line(), 0);
    }

    #[test]
    fn custom_severity_name_tracks_the_variant() {
        let named = Event::new(Severity::custom("Audit"), "x");
        assert_eq!(named.custom_severity_name(), Some("Audit"));

        let unnamed = Event::new(Severity::Custom(None), "x");
        assert_eq!(unnamed.custom_severity_name(), None);

        let fixed = Event::new(Severity::Error, "x");
        assert_eq!(fixed.custom_severity_name(), None);
    }

    #[test]
    fn pinned_timestamp_survives_build() {
        let instant = OffsetDateTime::from_unix_timestamp(1_700_000_000)
            .expect("valid unix timestamp");
        let event = Event::builder(Severity::Debugging)
            .timestamp(instant)
            .build();
        assert_eq!(event.timestamp(), instant);
        assert_eq!(
            event.timestamp_nanos(),
            i128::from(1_700_000_000_i64) * 1_000_000_000
        );
    }

    #[test]
    fn basename_strips_directories() {
        assert_eq!(file_basename("src/event.rs"), "event.rs");
        assert_eq!(file_basename("/a/b/c.rs"), "c.rs");
        assert_eq!(file_basename("lone.rs"), "lone.rs");
    }

    #[test]
    fn serialized_event_omits_absent_fields() {
        let event = Event::builder(Severity::custom("Audit"))
            .message("payload")
            .file("main.rs")
            .line(10)
            .build();
        let value = serde_json::to_value(&event).expect("event serializes");

        assert_eq!(value["severity"], "Audit");
        assert_eq!(value["custom_severity_name"], "Audit");
        assert_eq!(value["file"], "main.rs");
        assert_eq!(value["line"], 10);
        assert_eq!(value["message"], "payload");
        assert!(value.get("function").is_none());
        assert!(value["timestamp"].is_string());
        assert!(value["timestamp_ns"].is_number());
    }

    #[test]
    fn serialized_fixed_severity_has_no_custom_name() {
        let event = Event::new(Severity::Information, "hello");
        let value = serde_json::to_value(&event).expect("event serializes");
        assert_eq!(value["severity"], "Information");
        assert!(value.get("custom_severity_name").is_none());
        assert!(value.get("file").is_none());
        assert!(value.get("line").is_none());
    }
}
