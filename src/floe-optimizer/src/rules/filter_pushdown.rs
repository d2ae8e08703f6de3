//! Filter pushdown into partitioned table scans.
//!
//! Rewrites `Filter(TableScan)` so that the range-expressible part of the
//! predicate travels in the table handle. When partition pruning provably
//! enforces the whole predicate the filter node is removed; otherwise the
//! original predicate stays above the rewritten scan.

use std::collections::BTreeSet;
use std::sync::Arc;

use common_config::SessionConfig;
use common_error::{FloeError, FloeResult};
use floe_core::{ColumnHandle, Subfield, TupleDomain};
use floe_logical::{FilterNode, LogicalPlan, PlanNode, TableScanNode};
use floe_table::{MetadataProvider, TableHandle};
use log::debug;

use crate::decompose::{PredicateDecomposer, RangeDecomposer};
use crate::rules::rule::{RewriteRule, Transformed};
use crate::simplify::{CardinalityBoundSimplifier, DomainSimplifier};

/// Pushes range constraints from filters into table scans.
pub struct FilterPushdown {
    decomposer: Arc<dyn PredicateDecomposer>,
    simplifier: Arc<dyn DomainSimplifier>,
    metadata: Arc<dyn MetadataProvider>,
}

impl FilterPushdown {
    /// Create the rule with the default decomposer and simplifier.
    pub fn new(metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            decomposer: Arc::new(RangeDecomposer::default()),
            simplifier: Arc::new(CardinalityBoundSimplifier),
            metadata,
        }
    }

    /// Replace the predicate decomposer.
    pub fn with_decomposer(mut self, decomposer: Arc<dyn PredicateDecomposer>) -> Self {
        self.decomposer = decomposer;
        self
    }

    /// Replace the domain simplifier.
    pub fn with_simplifier(mut self, simplifier: Arc<dyn DomainSimplifier>) -> Self {
        self.simplifier = simplifier;
        self
    }

    fn rewrite_filter(
        &self,
        filter: FilterNode,
        session: &SessionConfig,
    ) -> FloeResult<PlanNode> {
        let PlanNode::TableScan(scan) = filter.input.as_ref() else {
            return Ok(PlanNode::Filter(filter));
        };

        let decomposed = self.decomposer.decompose(&filter.predicate)?;

        // The scan-level predicate mechanism only accepts whole columns;
        // constraints on nested paths must stay in a residual filter.
        let has_nested_constraints = decomposed
            .tuple_domain
            .column_domains()
            .is_some_and(|map| map.keys().any(|subfield| !subfield.is_whole_column()));

        let entire_column_domain = self.resolve_columns(&decomposed.tuple_domain, scan)?;

        let simplified = self
            .simplifier
            .simplify(&entire_column_domain, &session.planner);
        let widened = simplified != entire_column_domain;

        // The pushed constraint supersedes whatever the old handle carried.
        let new_scan = TableScanNode {
            table: scan.table.clone().with_constraint(simplified.clone()),
            output_symbols: scan.output_symbols.clone(),
            assignments: scan.assignments.clone(),
            current_constraint: TupleDomain::all(),
            enforced_constraint: TupleDomain::all(),
        };

        if filter.predicate.is_true_literal() {
            return Ok(PlanNode::TableScan(new_scan));
        }

        if decomposed.remaining.is_true_literal()
            && !has_nested_constraints
            && !widened
            && self.can_enforce(&new_scan.table, &simplified)?
        {
            debug!(
                "partition pruning enforces the whole predicate on {}, removing filter",
                new_scan.table.qualified_name()
            );
            let mut enforced_scan = new_scan;
            enforced_scan.enforced_constraint = simplified;
            return Ok(PlanNode::TableScan(enforced_scan));
        }

        Ok(PlanNode::Filter(FilterNode::new(
            PlanNode::TableScan(new_scan),
            filter.predicate,
        )))
    }

    /// Project the subfield constraints down to whole physical columns.
    ///
    /// Nested-path entries are dropped; a whole-column entry whose root has
    /// no assignment means the predicate and the scan disagree about the
    /// scan's output, which is a planner bug, not a pushdown miss.
    fn resolve_columns(
        &self,
        tuple_domain: &TupleDomain<Subfield>,
        scan: &TableScanNode,
    ) -> FloeResult<TupleDomain<ColumnHandle>> {
        if let Some(domains) = tuple_domain.column_domains() {
            for subfield in domains.keys() {
                if subfield.is_whole_column() && !scan.assignments.contains_key(&subfield.root) {
                    return Err(FloeError::column_not_found(format!(
                        "no assignment for column '{}' on scan of {}",
                        subfield.root,
                        scan.table.qualified_name()
                    )));
                }
            }
        }
        Ok(tuple_domain.transform_keys(|subfield| {
            if !subfield.is_whole_column() {
                return None;
            }
            scan.assignments.get(&subfield.root).cloned()
        }))
    }

    /// Check that every partition spec in the table's history prunes by
    /// identity on all constrained columns.
    ///
    /// Files written under an old spec keep its layout, so one spec that
    /// cannot prune a constrained column vetoes enforcement outright.
    fn can_enforce(
        &self,
        handle: &TableHandle,
        domain: &TupleDomain<ColumnHandle>,
    ) -> FloeResult<bool> {
        let constrained_ids: BTreeSet<i32> = domain
            .constrained_keys()
            .into_iter()
            .map(|column| column.id)
            .collect();

        for spec in self.metadata.partition_specs(handle)? {
            let identity_ids = spec.identity_source_ids();
            if !constrained_ids.is_subset(&identity_ids) {
                debug!(
                    "spec {} of {} does not identity-partition every constrained column",
                    spec.spec_id,
                    handle.qualified_name()
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl RewriteRule for FilterPushdown {
    fn name(&self) -> &'static str {
        "FilterPushdown"
    }

    fn description(&self) -> &'static str {
        "Push range constraints from filters into partitioned table scans"
    }

    fn apply(&self, plan: LogicalPlan, session: &SessionConfig) -> FloeResult<Transformed> {
        // The subfield-aware pushdown path owns filter rewriting when enabled.
        if session.pushdown_filter_enabled {
            return Ok(Transformed::no(plan));
        }

        let original = plan.clone();
        let rewritten = plan.try_transform(|node| match node {
            PlanNode::Filter(filter) => self.rewrite_filter(filter, session),
            other => Ok(other),
        })?;

        if rewritten == original {
            Ok(Transformed::no(rewritten))
        } else {
            Ok(Transformed::yes(rewritten))
        }
    }
}
