//! Metrics tracking.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub records_appended: AtomicU64,
    pub records_rejected: AtomicU64,
    pub recent_reads: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            records_appended: AtomicU64::new(0),
            records_rejected: AtomicU64::new(0),
            recent_reads: AtomicU64::new(0),
        }
    }

    pub fn record_append(&self) {
        self.records_appended.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reject(&self) {
        self.records_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read(&self) {
        self.recent_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_appended: self.records_appended.load(Ordering::Relaxed),
            records_rejected: self.records_rejected.load(Ordering::Relaxed),
            recent_reads: self.recent_reads.load(Ordering::Relaxed),
        }
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub records_appended: u64,
    pub records_rejected: u64,
    pub recent_reads: u64,
}
