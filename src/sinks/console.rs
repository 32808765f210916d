//! Console sink implementation

use crate::core::{LogEntry, PatternFormatter, Result, Sink};
use std::io::Write;

/// Writes every record to standard output, with the level colored by severity.
pub struct ConsoleSink {
    formatter: PatternFormatter,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            formatter: PatternFormatter::new(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            formatter: PatternFormatter::with_colors(use_colors),
        }
    }

    pub fn use_colors(&self) -> bool {
        self.formatter.use_colors()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
