//! Rewrite rules for Floe query plans.
//!
//! This module provides the rules that transform logical plans while
//! preserving the rows they produce.
//!
//! - **Filter Pushdown**: move range constraints into partitioned table
//!   scans and drop filters that partition pruning fully enforces.

mod filter_pushdown;
mod optimizer;
mod rule;

pub use filter_pushdown::FilterPushdown;
pub use optimizer::{Optimizer, OptimizerConfig};
pub use rule::{OptimizedPlan, RewriteRule, RuleTrace, Transformed};
