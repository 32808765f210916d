//! Logger configuration loaded from JSON
//!
//! An empty document (`{}`) yields exactly the logger created by
//! [`init`](crate::global::init).

use super::{
    build_mode::BuildMode,
    error::{LoggerError, Result},
    filter::ModuleFilter,
    level_map::SinkLevel,
    logger::{Logger, DEFAULT_LOGGER_NAME},
};
use crate::sinks::ConsoleSink;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub name: String,
    pub min_level: SinkLevel,
    /// Per-module directives such as `"csctrl=info,csctrl::rcon=trace"`; a
    /// bare level in the list replaces `min_level` for unmatched modules
    pub filter: Option<String>,
    /// Write to standard output
    pub console: bool,
    /// Color the level column on the console
    pub colors: bool,
    /// Also write a per-run `csctrl_<timestamp>.log` file into this directory
    pub file_directory: Option<PathBuf>,
    /// Overrides the build mode derived from the compilation profile
    pub build_mode: Option<BuildMode>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            min_level: SinkLevel::Trace,
            filter: None,
            console: true,
            colors: true,
            file_directory: None,
            build_mode: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "name must not be empty"));
        }
        self.module_filter()?;
        #[cfg(not(feature = "file"))]
        if self.file_directory.is_some() {
            return Err(LoggerError::config(
                "LoggerConfig",
                "file_directory requires the `file` feature",
            ));
        }
        Ok(())
    }

    /// The parsed `filter` directives, empty when none are configured
    pub fn module_filter(&self) -> Result<ModuleFilter> {
        match self.filter {
            Some(ref directives) => directives.parse(),
            None => Ok(ModuleFilter::new()),
        }
    }

    pub fn build(&self) -> Result<Logger> {
        self.validate()?;

        let mut builder = Logger::builder()
            .name(self.name.clone())
            .min_level(self.min_level)
            .filter(self.module_filter()?)
            .build_mode(self.build_mode.unwrap_or_else(BuildMode::current));

        if self.console {
            builder = builder.sink(ConsoleSink::with_colors(self.colors));
        }

        #[cfg(feature = "file")]
        if let Some(ref directory) = self.file_directory {
            builder = builder.sink(crate::sinks::FileSink::timestamped(directory)?);
        }

        Ok(builder.build())
    }
}
