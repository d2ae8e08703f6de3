//! Logical plans for the Floe query planner.
//!
//! This crate provides the plan representation rewrites operate on:
//! - `ScalarExpr` and `BinaryOp` for predicate trees
//! - `PlanNode` and the per-operator structs
//! - `LogicalPlan` and `PlanBuilder` for whole plans

pub mod expr;
pub mod ops;
pub mod plan;

// Re-export commonly used types
pub use expr::{col, lit, BinaryOp, ScalarExpr, UnaryOp};
pub use ops::{FilterNode, LimitNode, PlanNode, ProjectNode, TableScanNode};
pub use plan::{LogicalPlan, PlanBuilder};
