//! Snapshot management for table versioning.

use serde::{Deserialize, Serialize};

/// Snapshot identifier.
pub type SnapshotId = u64;

/// A snapshot represents a committed point-in-time view of a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unique snapshot ID.
    pub id: SnapshotId,
    /// Timestamp when the snapshot was committed (Unix epoch millis).
    pub timestamp: i64,
    /// Parent snapshot ID.
    pub parent: Option<SnapshotId>,
    /// Partition spec that was current when this snapshot was written.
    pub spec_id: i32,
}

impl Snapshot {
    /// Create a new snapshot with auto-generated ID.
    pub fn new(spec_id: i32) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);

        Self {
            id: COUNTER.fetch_add(1, Ordering::Relaxed),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as i64)
                .unwrap_or(0),
            parent: None,
            spec_id,
        }
    }

    /// Create a child snapshot under the same partition spec.
    pub fn child(&self) -> Self {
        let mut snapshot = Self::new(self.spec_id);
        snapshot.parent = Some(self.id);
        snapshot
    }
}
