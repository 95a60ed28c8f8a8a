//! Metrics hooks for request handling
//!
//! Counts what the service did with each request. Recorded through the
//! `MetricsRecorder` trait so callers that do not care can pass
//! `NoOpMetrics`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the distance service
///
/// Thread-safe counters, never reset.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total requests handled
    pub requests_handled: AtomicU64,
    /// Total responses published
    pub responses_published: AtomicU64,
    /// Requests naming an unknown planet
    pub unknown_planets: AtomicU64,
    /// Responses published truncated
    pub overflows: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_handled: self.requests_handled.load(Ordering::Relaxed),
            responses_published: self.responses_published.load(Ordering::Relaxed),
            unknown_planets: self.unknown_planets.load(Ordering::Relaxed),
            overflows: self.overflows.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_handled: u64,
    pub responses_published: u64,
    pub unknown_planets: u64,
    pub overflows: u64,
}

/// Trait for recording metrics (allows for different backends)
pub trait MetricsRecorder: Send + Sync {
    fn record_request(&self);
    fn record_published(&self);
    fn record_unknown_planet(&self);
    fn record_overflow(&self);
}

impl MetricsRecorder for Metrics {
    fn record_request(&self) {
        self.requests_handled.fetch_add(1, Ordering::Relaxed);
    }

    fn record_published(&self) {
        self.responses_published.fetch_add(1, Ordering::Relaxed);
    }

    fn record_unknown_planet(&self) {
        self.unknown_planets.fetch_add(1, Ordering::Relaxed);
    }

    fn record_overflow(&self) {
        self.overflows.fetch_add(1, Ordering::Relaxed);
    }
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_request(&self) {}
    fn record_published(&self) {}
    fn record_unknown_planet(&self) {}
    fn record_overflow(&self) {}
}
