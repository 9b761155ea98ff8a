//! Translation metrics and observability.
//!
//! Counters are plain atomics owned by a [`TranslationService`], so
//! concurrent requests can record without locking.
//!
//! [`TranslationService`]: crate::translation::TranslationService

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Translate calls received
    requests: AtomicUsize,

    /// Calls rejected by language validation before any provider ran
    rejected: AtomicUsize,

    /// Individual provider invocations
    provider_attempts: AtomicUsize,

    /// Provider invocations that returned an error
    provider_failures: AtomicUsize,

    /// Calls where every provider failed
    exhausted: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_provider_attempt(&self) {
        self.provider_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_provider_failure(&self) {
        self.provider_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_exhausted(&self) {
        self.exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn provider_attempts(&self) -> usize {
        self.provider_attempts.load(Ordering::Relaxed)
    }

    pub fn provider_failures(&self) -> usize {
        self.provider_failures.load(Ordering::Relaxed)
    }

    pub fn exhausted(&self) -> usize {
        self.exhausted.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let attempts = self.provider_attempts();
        let failures = self.provider_failures();
        let provider_success_rate = if attempts > 0 {
            (attempts.saturating_sub(failures) as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            requests: self.requests(),
            rejected: self.rejected(),
            provider_attempts: attempts,
            provider_failures: failures,
            provider_success_rate,
            exhausted: self.exhausted(),
        }
    }
}

/// Snapshot of the current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub requests: usize,
    pub rejected: usize,
    pub provider_attempts: usize,
    pub provider_failures: usize,

    /// Share of provider attempts that succeeded, as a percentage (0-100)
    pub provider_success_rate: f64,

    pub exhausted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = TranslationMetrics::new();
        assert_eq!(metrics.requests(), 0);
        assert_eq!(metrics.rejected(), 0);
        assert_eq!(metrics.provider_attempts(), 0);
        assert_eq!(metrics.provider_failures(), 0);
        assert_eq!(metrics.exhausted(), 0);
    }

    #[test]
    fn test_record_counters() {
        let metrics = TranslationMetrics::new();

        metrics.record_request();
        metrics.record_request();
        metrics.record_rejected();
        metrics.record_provider_attempt();
        metrics.record_provider_failure();
        metrics.record_exhausted();

        assert_eq!(metrics.requests(), 2);
        assert_eq!(metrics.rejected(), 1);
        assert_eq!(metrics.provider_attempts(), 1);
        assert_eq!(metrics.provider_failures(), 1);
        assert_eq!(metrics.exhausted(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();
        assert_eq!(report.requests, 0);
        assert_eq!(report.provider_success_rate, 0.0);
    }

    #[test]
    fn test_report_provider_success_rate() {
        let metrics = TranslationMetrics::new();

        // 4 attempts, 1 failure = 75% success rate
        for _ in 0..4 {
            metrics.record_provider_attempt();
        }
        metrics.record_provider_failure();

        let report = metrics.report();
        assert_eq!(report.provider_attempts, 4);
        assert_eq!(report.provider_failures, 1);
        assert_eq!(report.provider_success_rate, 75.0);
    }

    #[test]
    fn test_report_all_provider_failures() {
        let metrics = TranslationMetrics::new();
        metrics.record_provider_attempt();
        metrics.record_provider_failure();

        assert_eq!(metrics.report().provider_success_rate, 0.0);
    }

    #[test]
    fn test_instances_are_independent() {
        let first = TranslationMetrics::new();
        let second = TranslationMetrics::new();
        first.record_request();

        assert_eq!(first.requests(), 1);
        assert_eq!(second.requests(), 0);
    }
}
