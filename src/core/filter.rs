//! Per-module level directives
//!
//! A directive string is a comma-separated list of `module=level` pairs and at
//! most one bare `level`, e.g. `"warn,csctrl=info,csctrl::rcon=trace"`. A
//! record's threshold comes from the directive with the longest module prefix
//! matching its module path; a bare level applies to everything else.

use super::error::{LoggerError, Result};
use super::level_map::SinkLevel;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Directive {
    module: String,
    level: SinkLevel,
}

impl Directive {
    /// `csctrl` matches `csctrl` and `csctrl::rcon`, but not `csctrl_web`
    fn matches(&self, module_path: &str) -> bool {
        module_path
            .strip_prefix(self.module.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFilter {
    default: Option<SinkLevel>,
    directives: Vec<Directive>,
}

impl ModuleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level for records whose module matches no directive
    pub fn default_level(&self) -> Option<SinkLevel> {
        self.default
    }

    #[must_use]
    pub fn with_default(mut self, level: SinkLevel) -> Self {
        self.default = Some(level);
        self
    }

    /// Add or replace the directive for `module`
    #[must_use]
    pub fn with_directive(mut self, module: impl Into<String>, level: SinkLevel) -> Self {
        let module = module.into();
        self.directives.retain(|d| d.module != module);
        self.directives.push(Directive { module, level });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.directives.is_empty()
    }

    /// Threshold for `module_path`, or `None` when the filter has no opinion
    pub fn level_for(&self, module_path: Option<&str>) -> Option<SinkLevel> {
        module_path
            .and_then(|path| {
                self.directives
                    .iter()
                    .filter(|d| d.matches(path))
                    .max_by_key(|d| d.module.len())
            })
            .map(|d| d.level)
            .or(self.default)
    }
}

impl FromStr for ModuleFilter {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let mut filter = ModuleFilter::new();

        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((module, level)) => {
                    let module = module.trim();
                    if module.is_empty() {
                        return Err(LoggerError::config(
                            "filter",
                            format!("missing module in directive '{}'", part),
                        ));
                    }
                    let level = level.trim().parse().map_err(|e| LoggerError::config("filter", e))?;
                    filter = filter.with_directive(module, level);
                }
                None => {
                    if filter.default.is_some() {
                        return Err(LoggerError::config(
                            "filter",
                            format!("more than one default level in '{}'", s),
                        ));
                    }
                    let level = part.parse().map_err(|e| LoggerError::config("filter", e))?;
                    filter.default = Some(level);
                }
            }
        }

        Ok(filter)
    }
}
