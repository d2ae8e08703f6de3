//! Table handles carried through plans.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use floe_core::{ColumnHandle, TupleDomain};

use crate::snapshot::SnapshotId;

/// Identifier of the transaction a plan runs inside.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TransactionId(pub u64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "txn-{}", self.0)
    }
}

/// Handle to a concrete table version inside a transaction.
///
/// The constraint describes which rows the source is asked to produce;
/// planner rewrites replace it wholesale rather than intersecting into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHandle {
    /// Schema (namespace) name.
    pub schema_name: String,
    /// Table name within the schema.
    pub table_name: String,
    /// Transaction this handle was resolved in.
    pub transaction: TransactionId,
    /// Snapshot pinned at resolution time, if any.
    pub snapshot_id: Option<SnapshotId>,
    /// Range constraint the source must honor when producing rows.
    pub constraint: TupleDomain<ColumnHandle>,
    /// Columns of the table schema at resolution time.
    pub columns: Arc<Vec<ColumnHandle>>,
}

impl TableHandle {
    /// Create an unconstrained handle.
    pub fn new(
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
        transaction: TransactionId,
        columns: Vec<ColumnHandle>,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            table_name: table_name.into(),
            transaction,
            snapshot_id: None,
            constraint: TupleDomain::all(),
            columns: Arc::new(columns),
        }
    }

    /// Pin the handle to a snapshot.
    pub fn with_snapshot(mut self, snapshot_id: SnapshotId) -> Self {
        self.snapshot_id = Some(snapshot_id);
        self
    }

    /// Replace the handle's constraint.
    pub fn with_constraint(mut self, constraint: TupleDomain<ColumnHandle>) -> Self {
        self.constraint = constraint;
        self
    }

    /// Fully qualified table name.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema_name, self.table_name)
    }

    /// Look up a column of the table schema by name.
    pub fn column(&self, name: &str) -> Option<&ColumnHandle> {
        self.columns.iter().find(|col| col.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floe_core::{DataType, Domain, Value};

    fn sample_handle() -> TableHandle {
        TableHandle::new(
            "analytics",
            "events",
            TransactionId(7),
            vec![
                ColumnHandle::new(1, "region", DataType::String),
                ColumnHandle::new(2, "ts", DataType::Timestamp),
            ],
        )
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(sample_handle().qualified_name(), "analytics.events");
    }

    #[test]
    fn test_column_lookup() {
        let handle = sample_handle();
        assert_eq!(handle.column("region").map(|c| c.id), Some(1));
        assert!(handle.column("missing").is_none());
    }

    #[test]
    fn test_with_constraint_replaces() {
        let region = ColumnHandle::new(1, "region", DataType::String);
        let first = TupleDomain::from_domains([(
            region.clone(),
            Domain::single_value(Value::String("eu".into())),
        )]);
        let second = TupleDomain::from_domains([(
            region,
            Domain::single_value(Value::String("us".into())),
        )]);

        let handle = sample_handle()
            .with_constraint(first)
            .with_constraint(second.clone());
        assert_eq!(handle.constraint, second);
    }
}
