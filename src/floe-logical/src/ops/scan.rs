//! Table scan operator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use floe_core::{ColumnHandle, TupleDomain};
use floe_table::TableHandle;

/// Table scan operator, the entry point of all plans.
///
/// The two constraints serve different readers. `current_constraint`
/// describes everything known about the rows the scan produces and feeds
/// later planning decisions. `enforced_constraint` is the part the source
/// guarantees to apply itself, so filters covered by it can be dropped
/// from the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableScanNode {
    /// Resolved table this scan reads.
    pub table: TableHandle,
    /// Output symbols in production order.
    pub output_symbols: Vec<String>,
    /// Mapping from output symbol to physical column.
    pub assignments: BTreeMap<String, ColumnHandle>,
    /// Everything known about the rows this scan produces.
    pub current_constraint: TupleDomain<ColumnHandle>,
    /// The part of the constraint the source itself enforces.
    pub enforced_constraint: TupleDomain<ColumnHandle>,
}

impl TableScanNode {
    /// Create an unconstrained scan producing every column of the table
    /// under its own name.
    pub fn new(table: TableHandle) -> Self {
        let assignments: BTreeMap<String, ColumnHandle> = table
            .columns
            .iter()
            .map(|col| (col.name.clone(), col.clone()))
            .collect();
        let output_symbols = table.columns.iter().map(|col| col.name.clone()).collect();
        Self {
            table,
            output_symbols,
            assignments,
            current_constraint: TupleDomain::all(),
            enforced_constraint: TupleDomain::all(),
        }
    }

    /// Replace the symbol-to-column assignments and output order.
    pub fn with_assignments(
        mut self,
        assignments: BTreeMap<String, ColumnHandle>,
    ) -> Self {
        self.output_symbols = assignments.keys().cloned().collect();
        self.assignments = assignments;
        self
    }

    /// Resolve an output symbol to its physical column.
    pub fn column_for_symbol(&self, symbol: &str) -> Option<&ColumnHandle> {
        self.assignments.get(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floe_core::DataType;
    use floe_table::TransactionId;

    #[test]
    fn test_default_assignments() {
        let table = TableHandle::new(
            "analytics",
            "events",
            TransactionId(1),
            vec![
                ColumnHandle::new(1, "region", DataType::String),
                ColumnHandle::new(2, "ts", DataType::Timestamp),
            ],
        );
        let scan = TableScanNode::new(table);

        assert_eq!(scan.output_symbols.len(), 2);
        assert_eq!(scan.column_for_symbol("region").map(|c| c.id), Some(1));
        assert!(scan.column_for_symbol("missing").is_none());
        assert!(scan.current_constraint.is_all());
        assert!(scan.enforced_constraint.is_all());
    }
}
