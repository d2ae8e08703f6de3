//! Query optimizer for Floe logical plans.
//!
//! Provides the rewrite-rule framework and the filter-pushdown rule that
//! pushes range constraints into partitioned table scans.

pub mod decompose;
mod rules;
pub mod simplify;

pub use decompose::{
    ColumnExtractor, Decomposition, PredicateDecomposer, RangeDecomposer, SubfieldExtractor,
};
pub use rules::{
    FilterPushdown, OptimizedPlan, Optimizer, OptimizerConfig, RewriteRule, RuleTrace, Transformed,
};
pub use simplify::{CardinalityBoundSimplifier, DomainSimplifier};

use std::sync::Arc;

use common_config::SessionConfig;
use common_error::FloeResult;
use floe_logical::LogicalPlan;
use floe_table::MetadataProvider;

/// Optimize a logical plan with the default rule set.
pub fn optimize(
    plan: LogicalPlan,
    session: &SessionConfig,
    metadata: Arc<dyn MetadataProvider>,
) -> FloeResult<LogicalPlan> {
    let optimizer = Optimizer::new(vec![Box::new(FilterPushdown::new(metadata))]);
    optimizer.optimize(plan, session).map(|result| result.plan)
}
