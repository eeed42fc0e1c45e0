//! Delivery metrics for observability
//!
//! Counters are shared by every event created from one configuration, so
//! they reflect all sends regardless of which thread performed them.

use super::outcome::Outcome;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing how sent events were resolved
///
/// # Example
///
/// ```
/// use gelf_emitter::EmitterMetrics;
///
/// let metrics = EmitterMetrics::new();
/// metrics.record_delivered();
/// metrics.record_reported();
///
/// assert_eq!(metrics.total_attempts(), 2);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct EmitterMetrics {
    /// Payloads written to the collector
    delivered: AtomicU64,

    /// Payloads redirected to the fallback file
    fallback_written: AtomicU64,

    /// Sends that ended in an error report
    reported: AtomicU64,
}

impl EmitterMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            fallback_written: AtomicU64::new(0),
            reported: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fallback_written(&self) -> u64 {
        self.fallback_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn reported(&self) -> u64 {
        self.reported.load(Ordering::Relaxed)
    }

    /// Every terminal send, whatever its outcome
    pub fn total_attempts(&self) -> u64 {
        self.delivered() + self.fallback_written() + self.reported()
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_fallback(&self) -> u64 {
        self.fallback_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_reported(&self) -> u64 {
        self.reported.fetch_add(1, Ordering::Relaxed)
    }

    /// Count a finished send under its outcome
    pub fn record(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Delivered => self.record_delivered(),
            Outcome::FallbackWritten => self.record_fallback(),
            Outcome::Reported(_) => self.record_reported(),
        };
    }

    /// Percentage (0.0 - 100.0) of sends that did not reach the collector
    ///
    /// Returns 0.0 if nothing has been sent.
    pub fn failure_rate(&self) -> f64 {
        let total = self.total_attempts() as f64;
        if total == 0.0 {
            0.0
        } else {
            ((self.fallback_written() + self.reported()) as f64 / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.fallback_written.store(0, Ordering::Relaxed);
        self.reported.store(0, Ordering::Relaxed);
    }
}

impl Default for EmitterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EmitterMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            delivered: AtomicU64::new(self.delivered()),
            fallback_written: AtomicU64::new(self.fallback_written()),
            reported: AtomicU64::new(self.reported()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EmitterError;

    #[test]
    fn test_metrics_new() {
        let metrics = EmitterMetrics::new();
        assert_eq!(metrics.delivered(), 0);
        assert_eq!(metrics.fallback_written(), 0);
        assert_eq!(metrics.reported(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_record_by_outcome() {
        let metrics = EmitterMetrics::new();
        metrics.record(&Outcome::Delivered);
        metrics.record(&Outcome::Delivered);
        metrics.record(&Outcome::FallbackWritten);
        metrics.record(&Outcome::Reported(EmitterError::PortUndefined));

        assert_eq!(metrics.delivered(), 2);
        assert_eq!(metrics.fallback_written(), 1);
        assert_eq!(metrics.reported(), 1);
        assert_eq!(metrics.total_attempts(), 4);
        assert_eq!(metrics.failure_rate(), 50.0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = EmitterMetrics::new();
        metrics.record_delivered();

        let snapshot = metrics.clone();
        metrics.record_delivered();

        assert_eq!(snapshot.delivered(), 1);
        assert_eq!(metrics.delivered(), 2);

        metrics.reset();
        assert_eq!(metrics.total_attempts(), 0);
    }
}
