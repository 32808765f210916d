//! The fixed CSCTRL output pattern
//!
//! Every record renders as
//!
//! ```text
//! [HH:MM:SS.mmm] <function, left-justified in 37> <level, right-aligned in 5>: <message>
//! ```
//!
//! The function column holds the unqualified name of the function that logged.
//! Both it and the level are truncated to their column width, so the
//! message always starts at the same column. Tools parse this layout; keep it stable.

use super::log_entry::LogEntry;
use colored::Colorize;

/// strftime format of the leading timestamp (local time)
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Column width of the logging function's name
pub const LOCATION_WIDTH: usize = 37;

/// Column width of the level name
pub const LEVEL_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternFormatter {
    use_colors: bool,
}

impl PatternFormatter {
    pub const fn new() -> Self {
        Self { use_colors: true }
    }

    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Render an entry without a trailing newline
    pub fn format(&self, entry: &LogEntry) -> String {
        format!(
            "[{}] {} {}: {}",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            Self::location_column(entry),
            self.level_column(entry),
            entry.message
        )
    }

    fn location_column(entry: &LogEntry) -> String {
        let location: String = entry.function.as_deref().unwrap_or("").chars().take(LOCATION_WIDTH).collect();
        format!("{:<width$}", location, width = LOCATION_WIDTH)
    }

    fn level_column(&self, entry: &LogEntry) -> String {
        let name: String = entry.level.name().chars().take(LEVEL_WIDTH).collect();
        let padded = format!("{:>width$}", name, width = LEVEL_WIDTH);

        if self.use_colors {
            let painted = padded.color(entry.level.color());
            if entry.level >= super::SinkLevel::Critical {
                painted.bold().to_string()
            } else {
                painted.to_string()
            }
        } else {
            padded
        }
    }
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self::new()
    }
}
