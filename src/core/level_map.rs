//! Mapping from application severities to the level scale understood by sinks
//!
//! This is the only place where a [`Severity`] is translated. The logger applies
//! it once per record; macros and sinks never map levels themselves.

use super::severity::Severity;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level scale used by sinks and by the rendered output pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    #[serde(alias = "warn")]
    Warning = 3,
    Error = 4,
    Critical = 5,
    Off = 6,
}

impl SinkLevel {
    /// Full level name as rendered by the output pattern before truncation
    pub fn name(&self) -> &'static str {
        match self {
            SinkLevel::Trace => "trace",
            SinkLevel::Debug => "debug",
            SinkLevel::Info => "info",
            SinkLevel::Warning => "warning",
            SinkLevel::Error => "error",
            SinkLevel::Critical => "critical",
            SinkLevel::Off => "off",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            SinkLevel::Trace => Color::White,
            SinkLevel::Debug => Color::Cyan,
            SinkLevel::Info => Color::Green,
            SinkLevel::Warning => Color::Yellow,
            SinkLevel::Error => Color::Red,
            SinkLevel::Critical => Color::BrightRed,
            SinkLevel::Off => Color::White,
        }
    }
}

impl fmt::Display for SinkLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SinkLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(SinkLevel::Trace),
            "debug" => Ok(SinkLevel::Debug),
            "info" => Ok(SinkLevel::Info),
            "warn" | "warning" => Ok(SinkLevel::Warning),
            "error" => Ok(SinkLevel::Error),
            "critical" => Ok(SinkLevel::Critical),
            "off" => Ok(SinkLevel::Off),
            _ => Err(format!("Invalid level: '{}'", s)),
        }
    }
}

impl From<Severity> for SinkLevel {
    fn from(severity: Severity) -> Self {
        map_severity(severity)
    }
}

/// Map a severity onto the sink scale, one-to-one and order preserving.
pub fn map_severity(severity: Severity) -> SinkLevel {
    match severity {
        Severity::Trace => SinkLevel::Trace,
        Severity::Debug => SinkLevel::Debug,
        Severity::Info => SinkLevel::Info,
        Severity::Warn => SinkLevel::Warning,
        Severity::Error => SinkLevel::Error,
        Severity::Critical => SinkLevel::Critical,
    }
}

/// Map a raw severity discriminant; anything outside `0..=5` maps to `Info`.
pub fn map_raw(raw: i64) -> SinkLevel {
    match raw {
        0 => map_severity(Severity::Trace),
        1 => map_severity(Severity::Debug),
        2 => map_severity(Severity::Info),
        3 => map_severity(Severity::Warn),
        4 => map_severity(Severity::Error),
        5 => map_severity(Severity::Critical),
        _ => SinkLevel::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_one() {
        assert_eq!(map_severity(Severity::Trace), SinkLevel::Trace);
        assert_eq!(map_severity(Severity::Debug), SinkLevel::Debug);
        assert_eq!(map_severity(Severity::Info), SinkLevel::Info);
        assert_eq!(map_severity(Severity::Warn), SinkLevel::Warning);
        assert_eq!(map_severity(Severity::Error), SinkLevel::Error);
        assert_eq!(map_severity(Severity::Critical), SinkLevel::Critical);
    }

    #[test]
    fn test_order_preserving() {
        for pair in Severity::ALL.windows(2) {
            assert!(map_severity(pair[0]) < map_severity(pair[1]));
        }
    }

    #[test]
    fn test_raw_matches_enum() {
        for severity in Severity::ALL {
            assert_eq!(map_raw(severity as i64), map_severity(severity));
        }
    }

    #[test]
    fn test_raw_out_of_range_defaults_to_info() {
        assert_eq!(map_raw(-1), SinkLevel::Info);
        assert_eq!(map_raw(6), SinkLevel::Info);
        assert_eq!(map_raw(i64::MAX), SinkLevel::Info);
    }

    #[test]
    fn test_parse_sink_level() {
        assert_eq!("WARN".parse::<SinkLevel>(), Ok(SinkLevel::Warning));
        assert_eq!("off".parse::<SinkLevel>(), Ok(SinkLevel::Off));
        assert!("loud".parse::<SinkLevel>().is_err());
    }

    #[test]
    fn test_off_never_produced() {
        assert!(Severity::ALL.iter().all(|s| SinkLevel::from(*s) != SinkLevel::Off));
    }
}
