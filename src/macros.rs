//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes the logger first (`Logger`, `&Logger` or `Arc<Logger>`),
//! formats its arguments like `format!`, and records the call site.
//!
//! # Examples
//!
//! ```
//! use csctrl_logger::prelude::*;
//! use csctrl_logger::info;
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 27016;
//! info!(logger, "REST API listening on port {}", port);
//! ```
//!
//! `critical!` is not just loud: in development builds it panics after the
//! record is written.

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use csctrl_logger::prelude::*;
/// # let logger = Logger::new();
/// use csctrl_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "RCON auth failed for {}", "127.0.0.1:27015");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_at($severity, $crate::location!(), format!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical message, then halt if the logger runs in development mode.
///
/// # Examples
///
/// ```
/// # use csctrl_logger::prelude::*;
/// use csctrl_logger::critical;
/// let logger = Logger::builder().build_mode(BuildMode::Shipping).build();
/// critical!(logger, "Unknown match state: {}", 7);
/// ```
///
/// ```should_panic
/// # use csctrl_logger::prelude::*;
/// use csctrl_logger::critical;
/// let logger = Logger::builder().build_mode(BuildMode::Development).build();
/// critical!(logger, "Unknown match state: {}", 7);
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}
