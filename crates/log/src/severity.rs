//! Severity taxonomy for log events
//!
//! The fixed variants form a closed, ordered set with stable labels.
//! [`Severity::Custom`] is the open extension point: it carries a
//! caller-supplied name that takes the label's place. An unnamed custom
//! severity is valid and resolves to a fixed placeholder, so observers can
//! always render *some* label without re-deriving the enumeration.

use std::fmt;

use serde::{Serialize, Serializer};

/// Label substituted for a custom severity with no name.
pub const CUSTOM_PLACEHOLDER: &str = "Custom";

/// Classification of a log event's importance.
///
/// # Example
///
/// ```rust
/// use lumen_log::Severity;
///
/// assert_eq!(Severity::Information.label(), "Information");
/// assert_eq!(Severity::custom("Audit").label(), "Audit");
/// assert_eq!(Severity::Custom(None).label(), "Custom");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No severity was supplied at the call site.
    #[default]
    Undefined,
    /// Diagnostic detail, normally hidden outside development.
    Debugging,
    /// Routine operational message.
    Information,
    /// Something unexpected that the program recovered from.
    Warning,
    /// An operation failed.
    Error,
    /// The program cannot continue.
    Fatal,
    /// Caller-defined severity. `None` denotes an unnamed custom severity;
    /// its label is [`CUSTOM_PLACEHOLDER`].
    Custom(Option<String>),
}

impl Severity {
    /// Shorthand for a named [`Severity::Custom`].
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(Some(name.into()))
    }

    /// Numeric level of this severity.
    ///
    /// The numbering is part of the external contract and is stable:
    /// `Undefined` = -1, then `Debugging` = 0 through `Fatal` = 4, with
    /// `Custom` = 5 regardless of its name.
    #[must_use]
    pub const fn level(&self) -> i32 {
        match self {
            Self::Undefined => -1,
            Self::Debugging => 0,
            Self::Information => 1,
            Self::Warning => 2,
            Self::Error => 3,
            Self::Fatal => 4,
            Self::Custom(_) => 5,
        }
    }

    /// Severity for a numeric level.
    ///
    /// Total: level 5 yields an unnamed `Custom` (the numeric form cannot
    /// carry a name), and anything outside the known range collapses to
    /// `Undefined`.
    #[must_use]
    pub fn from_level(level: i32) -> Self {
        match level {
            0 => Self::Debugging,
            1 => Self::Information,
            2 => Self::Warning,
            3 => Self::Error,
            4 => Self::Fatal,
            5 => Self::Custom(None),
            _ => Self::Undefined,
        }
    }

    /// Resolved human-readable label.
    ///
    /// For the fixed variants this is a fixed, documented string,
    /// independent of any custom name. For `Custom` it is the supplied
    /// name, or [`CUSTOM_PLACEHOLDER`] when the name is absent.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Undefined => "Undefined",
            Self::Debugging => "Debugging",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
            Self::Custom(Some(name)) => name,
            Self::Custom(None) => CUSTOM_PLACEHOLDER,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
