//! Domain simplification before pushdown.

use std::cmp::Ordering;

use common_config::PlannerConfig;
use floe_core::{ColumnHandle, Domain, TupleDomain, Value, ValueRange};
use log::debug;

/// Widens pushed-down domains the storage layer would reject.
pub trait DomainSimplifier: Send + Sync {
    /// Simplify a constraint.
    ///
    /// The result must accept every row the input accepts; simplification
    /// only ever widens. Idempotent.
    fn simplify(
        &self,
        domain: &TupleDomain<ColumnHandle>,
        config: &PlannerConfig,
    ) -> TupleDomain<ColumnHandle>;
}

/// Default simplifier bounding the size of discrete value lists.
///
/// A value list longer than `max_domain_values` collapses to the closed
/// range over its minimum and maximum; if the values are not mutually
/// comparable the whole entry widens to unconstrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalityBoundSimplifier;

impl DomainSimplifier for CardinalityBoundSimplifier {
    fn simplify(
        &self,
        domain: &TupleDomain<ColumnHandle>,
        config: &PlannerConfig,
    ) -> TupleDomain<ColumnHandle> {
        let Some(domains) = domain.column_domains() else {
            return TupleDomain::none();
        };
        TupleDomain::from_domains(domains.iter().map(|(column, domain)| {
            (
                column.clone(),
                simplify_domain(column, domain, config.max_domain_values),
            )
        }))
    }
}

fn simplify_domain(column: &ColumnHandle, domain: &Domain, max_values: usize) -> Domain {
    let Domain::Values(values) = domain else {
        return domain.clone();
    };
    if values.len() <= max_values {
        return domain.clone();
    }
    match value_bounds(values) {
        Some((min, max)) => {
            debug!(
                "widening {} values on {column} to range [{min:?}, {max:?}]",
                values.len()
            );
            Domain::of_range(ValueRange::between(min, max))
        }
        // Values that do not order among themselves have no usable bounds.
        None => {
            debug!("widening {} incomparable values on {column} to all", values.len());
            Domain::All
        }
    }
}

fn value_bounds(values: &[Value]) -> Option<(Value, Value)> {
    let mut iter = values.iter();
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for value in iter {
        if value.compare(min)? == Ordering::Less {
            min = value;
        }
        if value.compare(max)? == Ordering::Greater {
            max = value;
        }
    }
    Some((min.clone(), max.clone()))
}
