//! Build mode policy for critical logs

use serde::{Deserialize, Serialize};

/// Decides what a `Critical` log does after it has been written.
///
/// In [`BuildMode::Development`] a critical log is an assertion failure: the
/// calling thread panics with the logged message. In [`BuildMode::Shipping`]
/// the line is emitted and execution continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Shipping,
}

impl BuildMode {
    /// `Development` when compiled with debug assertions, `Shipping` otherwise
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Shipping
        }
    }

    #[inline]
    pub fn is_shipping(&self) -> bool {
        *self == BuildMode::Shipping
    }

    /// Fatal-abort primitive invoked for every `Critical` log.
    #[track_caller]
    pub fn on_critical(&self, message: &str) {
        match self {
            BuildMode::Development => panic!("critical log: {}", message),
            BuildMode::Shipping => {}
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}
