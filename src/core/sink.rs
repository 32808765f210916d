//! Sink trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A destination that receives leveled log records and renders them.
pub trait Sink: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
