//! Logger metrics for observability
//!
//! Counters describing what happened to records after they passed the level
//! filter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use csctrl_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_logged();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.total_logged(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records that at least one sink failed to write
    dropped_count: AtomicU64,

    /// Records written by every sink
    total_logged: AtomicU64,

    /// Critical records seen, whether or not the build mode halted afterwards
    critical_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            dropped_count: AtomicU64::new(0),
            total_logged: AtomicU64::new(0),
            critical_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn critical_count(&self) -> u64 {
        self.critical_count.load(Ordering::Relaxed)
    }

    /// Returns the previous dropped count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_critical(&self) {
        self.critical_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of dispatched records that were dropped
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = dropped + self.total_logged() as f64;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.dropped_count.store(0, Ordering::Relaxed);
        self.total_logged.store(0, Ordering::Relaxed);
        self.critical_count.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dropped(), 0);
        assert_eq!(metrics.record_dropped(), 1);
        metrics.record_logged();
        metrics.record_critical();

        assert_eq!(metrics.dropped_count(), 2);
        assert_eq!(metrics.total_logged(), 1);
        assert_eq!(metrics.critical_count(), 1);
    }

    #[test]
    fn test_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        metrics.record_dropped();
        for _ in 0..3 {
            metrics.record_logged();
        }
        assert!((metrics.drop_rate() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_logged();
        metrics.record_dropped();
        metrics.reset();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.dropped_count(), 0);
    }
}
