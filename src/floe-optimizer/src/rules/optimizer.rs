//! The driver that applies rewrite rules to logical plans.
//!
//! Rules are applied in a fixed-point iteration until no more changes occur
//! or a maximum number of iterations is reached.

use common_config::SessionConfig;
use common_error::FloeResult;
use floe_logical::LogicalPlan;
use log::debug;

use super::rule::{OptimizedPlan, RewriteRule, RuleTrace};

/// Configuration for the optimizer driver.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Maximum number of iterations before stopping.
    pub max_iterations: usize,
    /// Whether to enable detailed tracing.
    pub enable_trace: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            enable_trace: false,
        }
    }
}

impl OptimizerConfig {
    /// Create a new config with the given max iterations.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Enable or disable tracing.
    pub fn with_trace(mut self, enable: bool) -> Self {
        self.enable_trace = enable;
        self
    }
}

/// The driver that applies rewrite rules to logical plans.
///
/// Rules run in registration order; repeated application is allowed until a
/// fixpoint is reached. Every registered rule must be idempotent on its own
/// output or the driver only stops at `max_iterations`.
pub struct Optimizer {
    /// The rules to apply (in order).
    rules: Vec<Box<dyn RewriteRule>>,
    /// Configuration.
    config: OptimizerConfig,
}

impl Optimizer {
    /// Create a new optimizer with the given rules.
    pub fn new(rules: Vec<Box<dyn RewriteRule>>) -> Self {
        Self {
            rules,
            config: OptimizerConfig::default(),
        }
    }

    /// Create a new optimizer with custom config.
    pub fn with_config(rules: Vec<Box<dyn RewriteRule>>, config: OptimizerConfig) -> Self {
        Self { rules, config }
    }

    /// Add a rule to the optimizer.
    pub fn add_rule<R: RewriteRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Optimize a logical plan.
    ///
    /// Applies rules in fixed-point iteration until no changes occur.
    pub fn optimize(&self, plan: LogicalPlan, session: &SessionConfig) -> FloeResult<OptimizedPlan> {
        let mut current_plan = plan;
        let mut iterations = 0;
        let mut total_rules_applied = 0;
        let mut trace = Vec::new();

        loop {
            if iterations >= self.config.max_iterations {
                debug!(
                    "Optimizer reached max iterations ({}), stopping",
                    self.config.max_iterations
                );
                break;
            }

            iterations += 1;
            let mut changed_this_iteration = false;

            for rule in &self.rules {
                let before = if self.config.enable_trace {
                    Some(current_plan.explain())
                } else {
                    None
                };

                let result = rule.apply(current_plan, session)?;

                if result.changed {
                    changed_this_iteration = true;
                    total_rules_applied += 1;

                    debug!("Rule '{}' applied in iteration {}", rule.name(), iterations);

                    if self.config.enable_trace {
                        trace.push(RuleTrace::new(
                            rule.name(),
                            before.unwrap_or_default(),
                            result.plan.explain(),
                            true,
                        ));
                    }
                }

                current_plan = result.plan;
            }

            if !changed_this_iteration {
                debug!("No changes in iteration {}, reached fixpoint", iterations);
                break;
            }
        }

        Ok(OptimizedPlan {
            plan: current_plan,
            iterations,
            rules_applied: total_rules_applied,
            trace,
        })
    }

    /// Optimize with a single pass (no fixpoint iteration).
    pub fn optimize_once(
        &self,
        plan: LogicalPlan,
        session: &SessionConfig,
    ) -> FloeResult<OptimizedPlan> {
        let mut current_plan = plan;
        let mut rules_applied = 0;
        let mut trace = Vec::new();

        for rule in &self.rules {
            let before = if self.config.enable_trace {
                Some(current_plan.explain())
            } else {
                None
            };

            let result = rule.apply(current_plan, session)?;

            if result.changed {
                rules_applied += 1;

                if self.config.enable_trace {
                    trace.push(RuleTrace::new(
                        rule.name(),
                        before.unwrap_or_default(),
                        result.plan.explain(),
                        true,
                    ));
                }
            }

            current_plan = result.plan;
        }

        Ok(OptimizedPlan {
            plan: current_plan,
            iterations: 1,
            rules_applied,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule::Transformed;
    use floe_core::{ColumnHandle, DataType};
    use floe_logical::{col, lit, PlanBuilder, PlanNode, TableScanNode};
    use floe_table::{TableHandle, TransactionId};

    fn sample_scan() -> TableScanNode {
        TableScanNode::new(TableHandle::new(
            "analytics",
            "events",
            TransactionId(1),
            vec![ColumnHandle::new(1, "region", DataType::String)],
        ))
    }

    struct AddLimitRule;

    impl RewriteRule for AddLimitRule {
        fn name(&self) -> &'static str {
            "AddLimit"
        }

        fn apply(&self, plan: LogicalPlan, _session: &SessionConfig) -> FloeResult<Transformed> {
            // Only add limit if not already present
            if matches!(plan.root(), PlanNode::Limit(_)) {
                return Ok(Transformed::no(plan));
            }

            Ok(Transformed::yes(LogicalPlan::new(PlanNode::limit(
                plan.root, 1000,
            ))))
        }
    }

    #[test]
    fn test_optimizer_basic() {
        let optimizer = Optimizer::new(vec![Box::new(AddLimitRule)]);
        let session = SessionConfig::default();

        let plan = PlanBuilder::scan(sample_scan())
            .filter(col("region").eq(lit("eu")))
            .build();

        let result = optimizer.optimize(plan, &session).unwrap();

        assert!(result.rules_applied > 0);
        assert!(result.plan.contains_op(|op| matches!(op, PlanNode::Limit(_))));
    }

    #[test]
    fn test_optimizer_fixpoint() {
        // Rule that does nothing - should reach fixpoint immediately
        struct NoChangeRule;

        impl RewriteRule for NoChangeRule {
            fn name(&self) -> &'static str {
                "NoChange"
            }

            fn apply(
                &self,
                plan: LogicalPlan,
                _session: &SessionConfig,
            ) -> FloeResult<Transformed> {
                Ok(Transformed::no(plan))
            }
        }

        let optimizer = Optimizer::new(vec![Box::new(NoChangeRule)]);
        let session = SessionConfig::default();

        let plan = PlanBuilder::scan(sample_scan()).build();
        let result = optimizer.optimize(plan, &session).unwrap();

        assert_eq!(result.iterations, 1);
        assert_eq!(result.rules_applied, 0);
    }

    #[test]
    fn test_optimizer_with_trace() {
        let config = OptimizerConfig::default().with_trace(true);
        let optimizer = Optimizer::with_config(vec![Box::new(AddLimitRule)], config);
        let session = SessionConfig::default();

        let plan = PlanBuilder::scan(sample_scan()).build();
        let result = optimizer.optimize(plan, &session).unwrap();

        assert!(!result.trace.is_empty());
        assert!(result.trace[0].changed);
    }
}
