//! In-memory sink
//!
//! Keeps rendered lines in a shared buffer. Useful for tests and for surfacing
//! recent log output inside the application.

use crate::core::{LogEntry, PatternFormatter, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared view of the lines captured by a [`MemorySink`]
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryBuffer {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    fn push(&self, line: String) {
        self.lines.lock().push(line);
    }
}

pub struct MemorySink {
    buffer: MemoryBuffer,
    formatter: PatternFormatter,
}

impl MemorySink {
    /// Captures uncolored lines
    pub fn new() -> Self {
        Self {
            buffer: MemoryBuffer::default(),
            formatter: PatternFormatter::with_colors(false),
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: PatternFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn buffer(&self) -> MemoryBuffer {
        self.buffer.clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.buffer.push(self.formatter.format(entry));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SinkLevel;

    #[test]
    fn test_buffer_shared_between_clones() {
        let mut sink = MemorySink::new();
        let buffer = sink.buffer();
        let other = buffer.clone();

        sink.append(&LogEntry::new(SinkLevel::Debug, "captured".to_string()))
            .unwrap();

        assert_eq!(buffer.len(), 1);
        assert!(other.contains("debug: captured"));

        other.clear();
        assert!(buffer.is_empty());
    }
}
