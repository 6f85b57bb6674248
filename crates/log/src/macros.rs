//! Logging macros that capture call-site metadata
//!
//! The macros are thin wrappers over [`Logger::emit`](crate::Logger::emit)
//! that attach `module_path!()`, `file!()`, and `line!()` at the call
//! expression, so function/file/line arrive without caller boilerplate.

/// Log a formatted message at an explicit severity.
///
/// ```rust
/// use lumen_log::{log, Logger, Severity};
///
/// let logger = Logger::new();
/// log!(logger, Severity::Warning, "disk {} at {}%", "sda", 93);
/// log!(logger, Severity::Undefined); // no message
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr) => {
        $logger.emit(
            $severity,
            ::core::option::Option::None,
            ::core::option::Option::Some(::core::module_path!()),
            ::core::option::Option::Some(::core::file!()),
            ::core::line!(),
        )
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.emit(
            $severity,
            ::core::option::Option::Some(::std::format!($($arg)+)),
            ::core::option::Option::Some(::core::module_path!()),
            ::core::option::Option::Some(::core::file!()),
            ::core::line!(),
        )
    };
}

/// [`log!`] at [`Severity::Debugging`](crate::Severity::Debugging).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debugging, $($arg)+)
    };
}

/// [`log!`] at [`Severity::Information`](crate::Severity::Information).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Information, $($arg)+)
    };
}

/// [`log!`] at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// [`log!`] at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// [`log!`] at [`Severity::Fatal`](crate::Severity::Fatal).
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}

/// [`log!`] at a named custom severity.
///
/// ```rust
/// use lumen_log::{custom, Logger};
///
/// let logger = Logger::new();
/// custom!(logger, "Audit", "user {} signed in", 42);
/// custom!(logger, "Heartbeat"); // no message
/// ```
#[macro_export]
macro_rules! custom {
    ($logger:expr, $name:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::custom($name), $($arg)+)
    };
    ($logger:expr, $name:expr) => {
        $crate::log!($logger, $crate::Severity::custom($name))
    };
}
