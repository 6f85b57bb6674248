//! Canonical rendering of events to human-readable lines
//!
//! Observers are free to format events however they like; this module is
//! the shared implementation the built-in observers use, so every stream
//! they write carries the same shape:
//!
//! ```text
//! 2026-08-06 14:03:52.117 [main.rs:42] [demo::run] Information: hello
//! ```
//!
//! The `[file:line]` annotation renders only when the file is present AND
//! the line is non-zero; the `[function]` annotation only when a function
//! was captured. An absent message renders as empty. Rendering never fails
//! and never panics.

use std::fmt::Write as _;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::event::Event;
use crate::severity::Severity;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
);

const NORMAL: &str = "\u{1b}[m";
const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const YELLOW: &str = "\u{1b}[33m";
const BLUE: &str = "\u{1b}[34m";
const MAGENTA: &str = "\u{1b}[35m";
const CYAN: &str = "\u{1b}[36m";
const WHITE: &str = "\u{1b}[37m";

/// Event timestamp rendered with millisecond precision.
#[must_use]
pub fn timestamp(event: &Event) -> String {
    event
        .timestamp()
        .format(&TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| String::from("<time-format-error>"))
}

/// Render the canonical plain-text line for an event.
#[must_use]
pub fn render(event: &Event) -> String {
    render_with(event, None)
}

/// Render the canonical line with the severity label wrapped in its ANSI
/// color.
#[must_use]
pub fn render_colored(event: &Event) -> String {
    render_with(event, Some(severity_color(event.severity())))
}

fn render_with(event: &Event, color: Option<&str>) -> String {
    let mut out = timestamp(event);
    out.push(' ');

    if let Some(file) = event.file() {
        if event.line() != 0 {
            let _ = write!(out, "[{}:{}] ", file, event.line());
        }
    }
    if let Some(function) = event.function() {
        let _ = write!(out, "[{function}] ");
    }

    match color {
        Some(color) => {
            let _ = write!(out, "{color}{}{NORMAL}", event.severity().label());
        }
        None => out.push_str(event.severity().label()),
    }
    out.push_str(": ");
    if let Some(message) = event.message() {
        out.push_str(message);
    }
    out
}

fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::Fatal => MAGENTA,
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Information => GREEN,
        Severity::Debugging => WHITE,
        Severity::Undefined => CYAN,
        Severity::Custom(_) => BLUE,
    }
}
