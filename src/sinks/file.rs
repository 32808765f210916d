//! File sink implementation

use crate::core::{LogEntry, LoggerError, PatternFormatter, Result, Sink};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Filename timestamp of per-run log files: `csctrl_2025-01-08---10-30-45.log`
pub const RUN_FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d---%H-%M-%S";

/// Appends uncolored records to a file held under an exclusive lock.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    formatter: PatternFormatter,
}

impl FileSink {
    /// Open `path` for appending.
    ///
    /// Fails with [`LoggerError::FileLockError`] when another sink or process
    /// already holds the file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        file.try_lock_exclusive()
            .map_err(|_| LoggerError::file_lock(path.display().to_string()))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            formatter: PatternFormatter::with_colors(false),
        })
    }

    /// Create a fresh per-run file `csctrl_<timestamp>.log` inside `directory`,
    /// creating the directory if needed.
    pub fn timestamped(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory).map_err(|e| {
            LoggerError::io_operation(
                "creating log directory",
                format!("cannot create '{}'", directory.display()),
                e,
            )
        })?;

        let timestamp = chrono::Local::now().format(RUN_FILE_TIMESTAMP_FORMAT);
        Self::new(directory.join(format!("csctrl_{}.log", timestamp)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::file_sink(self.path.display().to_string(), "writer not initialized"))?;

        let mut output = self.formatter.format(entry);
        output.push('\n');
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
        if let Some(writer) = self.writer.take() {
            if let Ok(file) = writer.into_inner() {
                let _ = FileExt::unlock(&file);
            }
        }
    }
}
