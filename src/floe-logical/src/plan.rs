//! Logical plan structure.
//!
//! A LogicalPlan is a tree of logical operators that represents a query.

use serde::{Deserialize, Serialize};

use crate::expr::ScalarExpr;
use crate::ops::{PlanNode, TableScanNode};

/// A logical plan representing a query.
///
/// Plans are immutable; rewrites rebuild the affected operators and share
/// the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalPlan {
    /// The root operator of the plan.
    pub root: PlanNode,
}

impl LogicalPlan {
    /// Create a new logical plan with the given root operator.
    pub fn new(root: PlanNode) -> Self {
        Self { root }
    }

    /// Get a reference to the root operator.
    pub fn root(&self) -> &PlanNode {
        &self.root
    }

    /// Generate a tree-formatted explanation of the plan.
    pub fn explain(&self) -> String {
        let mut output = String::new();
        output.push_str("Logical Plan:\n");
        output.push_str(&self.root.explain(1));
        output
    }

    /// Count the number of operators in the plan.
    pub fn operator_count(&self) -> usize {
        fn count(op: &PlanNode) -> usize {
            1 + op.input().map_or(0, count)
        }
        count(&self.root)
    }

    /// Get the maximum depth of the plan tree.
    pub fn depth(&self) -> usize {
        fn max_depth(op: &PlanNode) -> usize {
            1 + op.input().map_or(0, max_depth)
        }
        max_depth(&self.root)
    }

    /// Check if the plan contains an operator matching a predicate.
    pub fn contains_op<F>(&self, predicate: F) -> bool
    where
        F: Fn(&PlanNode) -> bool,
    {
        fn check<F>(op: &PlanNode, predicate: &F) -> bool
        where
            F: Fn(&PlanNode) -> bool,
        {
            predicate(op) || op.input().is_some_and(|input| check(input, predicate))
        }
        check(&self.root, &predicate)
    }

    /// Transform the plan by applying a fallible function to each operator
    /// (bottom-up).
    pub fn try_transform<F, E>(self, f: F) -> Result<Self, E>
    where
        F: Fn(PlanNode) -> Result<PlanNode, E>,
    {
        fn transform_op<F, E>(op: PlanNode, f: &F) -> Result<PlanNode, E>
        where
            F: Fn(PlanNode) -> Result<PlanNode, E>,
        {
            // Transform children first, then this node.
            let transformed = match op {
                PlanNode::TableScan(_) => op,
                PlanNode::Filter(mut filter) => {
                    filter.input = Box::new(transform_op(*filter.input, f)?);
                    PlanNode::Filter(filter)
                }
                PlanNode::Project(mut project) => {
                    project.input = Box::new(transform_op(*project.input, f)?);
                    PlanNode::Project(project)
                }
                PlanNode::Limit(mut limit) => {
                    limit.input = Box::new(transform_op(*limit.input, f)?);
                    PlanNode::Limit(limit)
                }
            };
            f(transformed)
        }

        Ok(Self {
            root: transform_op(self.root, &f)?,
        })
    }
}

impl std::fmt::Display for LogicalPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.explain())
    }
}

impl From<PlanNode> for LogicalPlan {
    fn from(op: PlanNode) -> Self {
        Self::new(op)
    }
}

/// Builder for constructing logical plans fluently.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    op: PlanNode,
}

impl PlanBuilder {
    /// Start building from a scan.
    pub fn scan(scan: TableScanNode) -> Self {
        Self {
            op: PlanNode::scan(scan),
        }
    }

    /// Add a filter.
    pub fn filter(self, predicate: ScalarExpr) -> Self {
        Self {
            op: PlanNode::filter(self.op, predicate),
        }
    }

    /// Add a projection.
    pub fn project(self, projections: Vec<(String, ScalarExpr)>) -> Self {
        Self {
            op: PlanNode::project(self.op, projections),
        }
    }

    /// Add a limit.
    pub fn limit(self, limit: u64) -> Self {
        Self {
            op: PlanNode::limit(self.op, limit),
        }
    }

    /// Build the final plan.
    pub fn build(self) -> LogicalPlan {
        LogicalPlan::new(self.op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{col, lit};
    use floe_core::{ColumnHandle, DataType};
    use floe_table::{TableHandle, TransactionId};

    fn sample_scan() -> TableScanNode {
        TableScanNode::new(TableHandle::new(
            "analytics",
            "events",
            TransactionId(1),
            vec![
                ColumnHandle::new(1, "region", DataType::String),
                ColumnHandle::new(2, "ts", DataType::Timestamp),
            ],
        ))
    }

    #[test]
    fn test_plan_creation() {
        let plan = LogicalPlan::new(PlanNode::scan(sample_scan()));

        assert_eq!(plan.operator_count(), 1);
        assert_eq!(plan.depth(), 1);
    }

    #[test]
    fn test_plan_builder() {
        let plan = PlanBuilder::scan(sample_scan())
            .filter(col("region").eq(lit("eu")))
            .project(vec![("region".to_string(), col("region"))])
            .limit(10)
            .build();

        assert_eq!(plan.operator_count(), 4);
        assert_eq!(plan.depth(), 4);
    }

    #[test]
    fn test_plan_explain() {
        let plan = PlanBuilder::scan(sample_scan())
            .filter(col("region").eq(lit("eu")))
            .build();

        let explain = plan.explain();
        assert!(explain.contains("Logical Plan"));
        assert!(explain.contains("Filter"));
        assert!(explain.contains("TableScan"));
    }

    #[test]
    fn test_plan_contains_op() {
        let plan = PlanBuilder::scan(sample_scan())
            .filter(col("region").eq(lit("eu")))
            .build();

        assert!(plan.contains_op(|op| matches!(op, PlanNode::Filter(_))));
        assert!(plan.contains_op(|op| matches!(op, PlanNode::TableScan(_))));
        assert!(!plan.contains_op(|op| matches!(op, PlanNode::Limit(_))));
    }

    #[test]
    fn test_try_transform_bottom_up() {
        let plan = PlanBuilder::scan(sample_scan())
            .filter(col("region").eq(lit("eu")))
            .build();

        // Wrap every scan in a limit; the filter above survives.
        let transformed: Result<_, std::convert::Infallible> = plan.try_transform(|op| {
            if matches!(op, PlanNode::TableScan(_)) {
                Ok(PlanNode::limit(op, 1000))
            } else {
                Ok(op)
            }
        });

        let transformed = transformed.unwrap();
        assert_eq!(transformed.operator_count(), 3);
        assert!(transformed.contains_op(|op| matches!(op, PlanNode::Limit(_))));
    }

    #[test]
    fn test_try_transform_propagates_errors() {
        let plan = PlanBuilder::scan(sample_scan()).build();
        let result = plan.try_transform(|_| Err("boom"));
        assert_eq!(result.unwrap_err(), "boom");
    }
}
