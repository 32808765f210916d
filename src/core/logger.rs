//! Main logger implementation

use super::{
    build_mode::BuildMode,
    error::Result,
    filter::ModuleFilter,
    level_map::{map_severity, SinkLevel},
    log_entry::{LogEntry, Location},
    metrics::LoggerMetrics,
    severity::Severity,
    sink::Sink,
};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::fmt;

/// Name every CSCTRL logger is created under
pub const DEFAULT_LOGGER_NAME: &str = "CSCTRL";

/// A named logger dispatching records to its sinks on the calling thread.
///
/// Share it as `Arc<Logger>`; every method takes `&self`.
pub struct Logger {
    name: String,
    min_level: RwLock<SinkLevel>,
    filter: RwLock<ModuleFilter>,
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    build_mode: BuildMode,
    metrics: LoggerMetrics,
}

impl Logger {
    /// A logger with the default name, `Trace` threshold and no sinks
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// The standard CSCTRL logger: colored standard output, `Trace` threshold.
    #[must_use]
    pub fn stdout() -> Self {
        Self::builder().sink(ConsoleSink::new()).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> SinkLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: impl Into<SinkLevel>) {
        *self.min_level.write() = level.into();
    }

    /// Replace the per-module directives; modules they don't cover use `min_level`
    pub fn set_filter(&self, filter: ModuleFilter) {
        *self.filter.write() = filter;
    }

    pub fn filter(&self) -> ModuleFilter {
        self.filter.read().clone()
    }

    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// Whether a record without a known module passes the threshold
    #[inline]
    pub fn is_enabled(&self, level: SinkLevel) -> bool {
        self.is_enabled_for(level, None)
    }

    pub fn is_enabled_for(&self, level: SinkLevel, module_path: Option<&str>) -> bool {
        let threshold = self
            .filter
            .read()
            .level_for(module_path)
            .unwrap_or_else(|| *self.min_level.read());
        level != SinkLevel::Off && level >= threshold
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log without a source location.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.dispatch(severity, None, message.into());
    }

    /// Log from a known call site. This is what the logging macros expand to.
    ///
    /// # Panics
    ///
    /// When `severity` is [`Severity::Critical`] and the build mode is
    /// [`BuildMode::Development`], after the record has been written and the
    /// sinks flushed. The panic is reported at the caller's location.
    #[track_caller]
    pub fn log_at(&self, severity: Severity, location: Location, message: impl Into<String>) {
        self.dispatch(severity, Some(location), message.into());
    }

    #[track_caller]
    fn dispatch(&self, severity: Severity, location: Option<Location>, message: String) {
        let level = map_severity(severity);
        let enabled = self.is_enabled_for(level, location.map(|l| l.module_path));
        if !enabled && !severity.is_fatal() {
            return;
        }

        let mut entry = LogEntry::new(level, &message);
        if let Some(location) = location {
            entry = entry.with_location(location);
        }

        if enabled {
            let mut sinks = self.sinks.write();
            Self::process_sync(&mut sinks, &entry, &self.metrics);
        }

        if severity.is_fatal() {
            self.metrics.record_critical();
            if let Err(e) = self.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush before critical: {}", e);
            }
            self.build_mode.on_critical(&message);
        }
    }

    /// Write one entry to every sink, isolating failures and panics per sink.
    ///
    /// Returns `true` when at least one sink failed.
    fn process_sync(sinks: &mut [Box<dyn Sink>], entry: &LogEntry, metrics: &LoggerMetrics) -> bool {
        let mut has_error = false;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            let append_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.append(entry)));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} panicked: {}. \
                         Other sinks continue to function.",
                        idx, panic_msg
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            metrics.record_dropped();
        } else {
            metrics.record_logged();
        }

        has_error
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Severity::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    /// Log at `Critical`; panics afterwards in development builds.
    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Severity::Critical, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks = self.sinks.read();
        let sink_names: Vec<&str> = sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .field("filter", &*self.filter.read())
            .field("build_mode", &self.build_mode)
            .field("sinks", &sink_names)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' shutting down with {} dropped logs (drop rate: {:.2}%)",
                self.name,
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use csctrl_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Severity::Debug)
///     .sink(ConsoleSink::with_colors(false))
///     .build_mode(BuildMode::Shipping)
///     .build();
///
/// assert_eq!(logger.name(), "CSCTRL");
/// ```
pub struct LoggerBuilder {
    name: String,
    min_level: SinkLevel,
    filter: ModuleFilter,
    sinks: Vec<Box<dyn Sink>>,
    build_mode: BuildMode,
}

impl LoggerBuilder {
    /// Defaults: name `CSCTRL`, threshold `Trace`, build mode of this compilation, no sinks
    pub fn new() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            min_level: SinkLevel::Trace,
            filter: ModuleFilter::new(),
            sinks: Vec::new(),
            build_mode: BuildMode::current(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: impl Into<SinkLevel>) -> Self {
        self.min_level = level.into();
        self
    }

    /// Per-module thresholds, taking precedence over `min_level` where they match
    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, filter: ModuleFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Override the critical-log policy, e.g. to test shipping behavior in a debug build
    #[must_use = "builder methods return a new value"]
    pub fn build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            min_level: RwLock::new(self.min_level),
            filter: RwLock::new(self.filter),
            sinks: RwLock::new(self.sinks),
            build_mode: self.build_mode,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
