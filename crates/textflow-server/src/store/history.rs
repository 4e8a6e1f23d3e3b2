//! Bounded run history.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::RunRecord;

/// Default number of runs kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Most-recent-first list of run records, capped at a fixed size.
///
/// Cloning the handle shares the underlying list. Appends take the write
/// lock, so trimming to the cap stays consistent under concurrent runs.
#[derive(Clone)]
pub struct RunHistory {
    records: Arc<RwLock<VecDeque<RunRecord>>>,
    capacity: usize,
}

impl Default for RunHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl RunHistory {
    /// Create an empty history holding at most `capacity` runs (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(RwLock::new(VecDeque::with_capacity(capacity + 1))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert a record at the front, dropping the oldest past the cap.
    ///
    /// Records are not deduplicated by id.
    pub async fn append(&self, record: RunRecord) {
        let mut records = self.records.write().await;
        records.push_front(record);
        records.truncate(self.capacity);
    }

    /// The first `min(limit, len)` records, most recent first.
    pub async fn query(&self, limit: usize) -> Vec<RunRecord> {
        let records = self.records.read().await;
        records.iter().take(limit).cloned().collect()
    }

    /// First record with the given id.
    pub async fn find_by_id(&self, id: &str) -> Option<RunRecord> {
        let records = self.records.read().await;
        records.iter().find(|record| record.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
