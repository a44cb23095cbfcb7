//! Append-only store trait and in-memory implementation
//!
//! The trait deliberately exposes no update or delete: once written, a
//! record is out of the application's reach.

use crate::record::{AuditFilter, AuditRecord};
use async_trait::async_trait;
use campus_core::{CampusError, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Append-only audit persistence
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Append a record
    async fn append(&self, record: AuditRecord) -> Result<()>;

    /// Records passing the filter, newest-first
    async fn query(&self, filter: AuditFilter) -> Result<Vec<AuditRecord>>;
}

/// In-memory audit store
///
/// Backs tests and single-process deployments. `fail_writes` simulates a
/// storage outage so the best-effort contract can be exercised.
#[derive(Default)]
pub struct MemoryAuditStore {
    records: RwLock<Vec<AuditRecord>>,
    fail_writes: AtomicBool,
}

impl MemoryAuditStore {
    /// Create an empty store
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Toggle simulated write failure
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of records written so far
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl AuditStore for MemoryAuditStore {
    async fn append(&self, record: AuditRecord) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CampusError::storage("audit store unavailable"));
        }
        self.records.write().push(record);
        Ok(())
    }

    async fn query(&self, filter: AuditFilter) -> Result<Vec<AuditRecord>> {
        let records = self.records.read();
        let mut matched: Vec<AuditRecord> = records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        // Newest first; insertion order breaks timestamp ties stably
        matched.reverse();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}
