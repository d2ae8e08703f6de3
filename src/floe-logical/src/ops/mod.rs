//! Logical operators for query plans.

mod filter;
mod limit;
mod project;
mod scan;

pub use filter::FilterNode;
pub use limit::LimitNode;
pub use project::ProjectNode;
pub use scan::TableScanNode;

use serde::{Deserialize, Serialize};

/// Logical operator in a query plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanNode {
    /// Scan a table.
    TableScan(TableScanNode),
    /// Filter rows based on a predicate.
    Filter(FilterNode),
    /// Project columns.
    Project(ProjectNode),
    /// Limit number of rows.
    Limit(LimitNode),
}

impl PlanNode {
    /// Wrap a scan.
    pub fn scan(scan: TableScanNode) -> Self {
        Self::TableScan(scan)
    }

    /// Wrap an input in a filter.
    pub fn filter(input: PlanNode, predicate: crate::expr::ScalarExpr) -> Self {
        Self::Filter(FilterNode::new(input, predicate))
    }

    /// Wrap an input in a projection.
    pub fn project(input: PlanNode, projections: Vec<(String, crate::expr::ScalarExpr)>) -> Self {
        Self::Project(ProjectNode::new(input, projections))
    }

    /// Wrap an input in a limit.
    pub fn limit(input: PlanNode, limit: u64) -> Self {
        Self::Limit(LimitNode::new(input, limit))
    }

    /// Get the input operator, if any.
    pub fn input(&self) -> Option<&PlanNode> {
        match self {
            Self::TableScan(_) => None,
            Self::Filter(op) => Some(&op.input),
            Self::Project(op) => Some(&op.input),
            Self::Limit(op) => Some(&op.input),
        }
    }

    /// Get the name of this operator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TableScan(_) => "TableScan",
            Self::Filter(_) => "Filter",
            Self::Project(_) => "Project",
            Self::Limit(_) => "Limit",
        }
    }

    /// Explain this operator as a string.
    pub fn explain(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        let mut result = format!("{}{}", prefix, self.explain_self());

        if let Some(input) = self.input() {
            result.push('\n');
            result.push_str(&input.explain(indent + 1));
        }

        result
    }

    fn explain_self(&self) -> String {
        match self {
            Self::TableScan(op) => {
                let constrained = op.current_constraint.constrained_keys().len();
                format!(
                    "TableScan({}, columns={}, constrained={})",
                    op.table.qualified_name(),
                    op.output_symbols.len(),
                    constrained
                )
            }
            Self::Filter(op) => format!("Filter({})", op.predicate),
            Self::Project(op) => format!("Project({} columns)", op.projections.len()),
            Self::Limit(op) => format!("Limit({})", op.limit),
        }
    }
}
