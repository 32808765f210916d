//! # csctrl_logger
//!
//! Logging for CSCTRL: one severity vocabulary, one fixed colored output
//! pattern, and a logger that treats `Critical` as a crash signal in
//! development builds.
//!
//! ```
//! use csctrl_logger::prelude::*;
//! use csctrl_logger::{info, warn};
//!
//! let logger = Logger::builder()
//!     .sink(ConsoleSink::new())
//!     .build_mode(BuildMode::Shipping)
//!     .build();
//!
//! info!(logger, "CSCTRL Version {}", env!("CARGO_PKG_VERSION"));
//! warn!(logger, "No servers configured");
//! ```
//!
//! Output:
//!
//! ```text
//! [10:30:45.123] src/main.rs:9                          info: CSCTRL Version 0.1.0
//! [10:30:45.124] src/main.rs:10                        warni: No servers configured
//! ```
//!
//! Code that cannot receive the logger by injection can use the process-wide
//! handle in [`global`]: call [`init`] once at startup, then [`logger`].

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{ConsoleSink, MemoryBuffer, MemorySink};
    pub use crate::core::{
        BuildMode, Location, LogEntry, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, ModuleFilter, PatternFormatter, Result, Severity, Sink, SinkLevel,
        DEFAULT_LOGGER_NAME,
    };
}

#[cfg(feature = "file")]
pub use crate::sinks::FileSink;
pub use crate::sinks::{ConsoleSink, MemoryBuffer, MemorySink};
pub use crate::core::{
    map_raw, map_severity, BuildMode, Location, LogEntry, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, ModuleFilter, PatternFormatter, Result, Severity, Sink,
    SinkLevel, DEFAULT_LOGGER_NAME,
};
pub use crate::global::{get_logger, init, init_with, logger};
