//! Table metadata and the provider seam the planner reads it through.

use serde::{Deserialize, Serialize};

use common_error::FloeResult;

use crate::handle::TableHandle;
use crate::snapshot::Snapshot;
use crate::spec::PartitionSpec;

/// Metadata of a single table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Id of the spec new data files are written under.
    pub current_spec_id: i32,
    /// Every partition spec the table has ever had, current one included.
    pub specs: Vec<PartitionSpec>,
    /// Committed snapshots, oldest first.
    pub snapshots: Vec<Snapshot>,
}

impl TableMetadata {
    /// Create metadata for a table with a single spec and no snapshots.
    pub fn new(spec: PartitionSpec) -> Self {
        Self {
            current_spec_id: spec.spec_id,
            specs: vec![spec],
            snapshots: Vec::new(),
        }
    }

    /// Record a spec change; the new spec becomes current.
    pub fn evolve_spec(mut self, spec: PartitionSpec) -> Self {
        self.current_spec_id = spec.spec_id;
        self.specs.push(spec);
        self
    }

    /// Append a committed snapshot.
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshots.push(snapshot);
        self
    }

    /// The spec new data files are written under.
    pub fn current_spec(&self) -> Option<&PartitionSpec> {
        self.specs
            .iter()
            .find(|spec| spec.spec_id == self.current_spec_id)
    }
}

/// Read access to table metadata during planning.
pub trait MetadataProvider: Send + Sync {
    /// Every partition spec of the table the handle points at.
    ///
    /// Historical specs are included; files written under them are still
    /// live until rewritten.
    fn partition_specs(&self, handle: &TableHandle) -> FloeResult<Vec<PartitionSpec>>;
}
