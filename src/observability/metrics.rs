//! Metrics registry for fileguard
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe, lock-free

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters shared by all request handlers
///
/// Uses Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Validation requests received
    requests: AtomicU64,
    /// Requests whose verdict was valid
    valid: AtomicU64,
    /// Requests whose verdict listed findings
    invalid: AtomicU64,
    /// Requests stopped by a request-level error
    rejected: AtomicU64,
    /// Data rows evaluated
    rows_validated: AtomicU64,
    /// Findings reported across all verdicts
    errors_reported: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment requests received
    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed validation run
    pub fn record_verdict(&self, valid: bool, rows: u64, errors: u64) {
        if valid {
            self.valid.fetch_add(1, Ordering::Relaxed);
        } else {
            self.invalid.fetch_add(1, Ordering::Relaxed);
        }
        self.rows_validated.fetch_add(rows, Ordering::Relaxed);
        self.errors_reported.fetch_add(errors, Ordering::Relaxed);
    }

    /// Increment rejected requests
    pub fn increment_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            valid: self.valid.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            rows_validated: self.rows_validated.load(Ordering::Relaxed),
            errors_reported: self.errors_reported.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub valid: u64,
    pub invalid: u64,
    pub rejected: u64,
    pub rows_validated: u64,
    pub errors_reported: u64,
}
