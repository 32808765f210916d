//! Core logger types and traits

pub mod build_mode;
pub mod config;
pub mod error;
pub mod filter;
pub mod level_map;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod pattern;
pub mod severity;
pub mod sink;

pub use build_mode::BuildMode;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use filter::ModuleFilter;
pub use level_map::{map_raw, map_severity, SinkLevel};
pub use log_entry::{Location, LogEntry};
pub use logger::{Logger, LoggerBuilder, DEFAULT_LOGGER_NAME};
pub use metrics::LoggerMetrics;
pub use pattern::PatternFormatter;
pub use severity::Severity;
pub use sink::Sink;
