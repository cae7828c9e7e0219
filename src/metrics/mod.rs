//! Basic metrics instrumentation for the contact store.
//!
//! Provides counters for accepted and rejected inserts.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for contact inserts.
///
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct StoreMetrics {
    /// Number of contacts stored
    contacts_added_total: Arc<AtomicU64>,

    /// Number of inserts rejected by validation
    validation_failures_total: Arc<AtomicU64>,
}

impl Default for StoreMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a stored contact.
    pub fn record_contact_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected insert.
    pub fn record_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Get total contacts stored.
    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    /// Get total rejected inserts.
    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.contacts_added_total.store(0, Ordering::Relaxed);
        self.validation_failures_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_added_total: self.contacts_added_total(),
            validation_failures_total: self.validation_failures_total(),
        }
    }
}

/// Point-in-time snapshot of the store metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub contacts_added_total: u64,
    pub validation_failures_total: u64,
}

impl MetricsSummary {
    /// Total insert attempts, accepted or not.
    pub fn attempts_total(&self) -> u64 {
        self.contacts_added_total + self.validation_failures_total
    }
}
