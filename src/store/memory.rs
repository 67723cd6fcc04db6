//! In-memory append log for user actions.
//! Used by: handlers, state.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{lock_err, Result};

/// One logged action. The timestamp is always server-assigned; callers
/// never supply it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogRecord {
    pub user: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered sequence of accepted records, insertion order = arrival order.
/// Grows without bound and lives exactly as long as the process.
pub struct LogStore {
    records: Mutex<Vec<LogRecord>>,
}

impl LogStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Stamps the current UTC time and appends. The stamp is taken while
    /// the lock is held, so timestamp order matches insertion order up to
    /// clock resolution.
    pub fn append(&self, user: String, action: String) -> Result<LogRecord> {
        let mut records = self.records.lock().map_err(lock_err("log store"))?;
        let record = LogRecord {
            user,
            action,
            timestamp: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    /// Returns up to `limit` records, newest first. Records sharing a
    /// timestamp keep reverse insertion order (last inserted first).
    pub fn recent(&self, limit: usize) -> Result<Vec<LogRecord>> {
        let records = self.records.lock().map_err(lock_err("log store"))?;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
