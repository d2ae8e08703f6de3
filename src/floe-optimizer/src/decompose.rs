//! Predicate decomposition into range constraints.
//!
//! Splits a filter predicate into a tuple domain over subfields plus a
//! remaining expression that still has to be evaluated per row.

use common_error::FloeResult;
use floe_core::{Domain, Subfield, TupleDomain, Value, ValueRange};
use floe_logical::{BinaryOp, ScalarExpr};

/// Maps expressions to the subfield they reference, if any.
pub trait SubfieldExtractor: Send + Sync {
    /// The subfield an expression references, or `None` when it is not a
    /// plain column or nested-field access.
    fn extract(&self, expr: &ScalarExpr) -> Option<Subfield>;
}

/// Default extractor covering column references and struct-field chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnExtractor;

impl SubfieldExtractor for ColumnExtractor {
    fn extract(&self, expr: &ScalarExpr) -> Option<Subfield> {
        match expr {
            ScalarExpr::Column(name) => Some(Subfield::column(name.clone())),
            ScalarExpr::GetField { base, name } => {
                Some(self.extract(base)?.field(name.clone()))
            }
            _ => None,
        }
    }
}

/// The outcome of decomposing a predicate.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Range constraints extracted from the predicate.
    pub tuple_domain: TupleDomain<Subfield>,
    /// Conjuncts the tuple domain does not capture; the literal TRUE
    /// exactly when the tuple domain alone is equivalent to the predicate.
    pub remaining: ScalarExpr,
}

/// Turns a boolean predicate into range constraints plus a remainder.
pub trait PredicateDecomposer: Send + Sync {
    /// Decompose a predicate.
    ///
    /// The conjunction of the tuple domain and the remaining expression
    /// must be logically equivalent to the input predicate.
    fn decompose(&self, predicate: &ScalarExpr) -> FloeResult<Decomposition>;
}

/// Default decomposer handling conjunctions of comparisons and IN lists.
///
/// Anything it cannot prove equivalent to a range constraint stays in the
/// remaining expression: OR trees, NOT, cross-column comparisons, function
/// calls, negated IN lists, and comparisons against null or NaN literals.
pub struct RangeDecomposer<E = ColumnExtractor> {
    extractor: E,
}

impl Default for RangeDecomposer<ColumnExtractor> {
    fn default() -> Self {
        Self {
            extractor: ColumnExtractor,
        }
    }
}

impl<E: SubfieldExtractor> RangeDecomposer<E> {
    /// Create a decomposer with a custom subfield extractor.
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    fn extract_entry(&self, conjunct: &ScalarExpr) -> Option<(Subfield, Domain)> {
        match conjunct {
            ScalarExpr::Binary { left, op, right } if op.is_comparison() => {
                if let (Some(subfield), Some(value)) =
                    (self.extractor.extract(left), literal_value(right))
                {
                    return comparison_domain(*op, value).map(|d| (subfield, d));
                }
                if let (Some(value), Some(subfield)) =
                    (literal_value(left), self.extractor.extract(right))
                {
                    return comparison_domain(op.flip()?, value).map(|d| (subfield, d));
                }
                None
            }
            ScalarExpr::InList {
                expr,
                list,
                negated: false,
            } => {
                let subfield = self.extractor.extract(expr)?;
                let values: Option<Vec<Value>> =
                    list.iter().map(literal_value).collect();
                Some((subfield, Domain::of_values(values?)))
            }
            _ => None,
        }
    }
}

impl<E: SubfieldExtractor> PredicateDecomposer for RangeDecomposer<E> {
    fn decompose(&self, predicate: &ScalarExpr) -> FloeResult<Decomposition> {
        let mut entries = Vec::new();
        let mut residual = Vec::new();

        for conjunct in predicate.conjuncts() {
            if conjunct.is_true_literal() {
                continue;
            }
            if conjunct.is_false_literal() {
                return Ok(Decomposition {
                    tuple_domain: TupleDomain::none(),
                    remaining: ScalarExpr::true_literal(),
                });
            }
            match self.extract_entry(conjunct) {
                Some(entry) => entries.push(entry),
                None => residual.push(conjunct.clone()),
            }
        }

        Ok(Decomposition {
            tuple_domain: TupleDomain::from_domains(entries),
            remaining: ScalarExpr::and_all(residual),
        })
    }
}

/// Extract a pushable literal from an expression.
///
/// Null and NaN literals are rejected: comparisons against them never
/// match any row under three-valued logic, and a range endpoint cannot
/// represent that.
fn literal_value(expr: &ScalarExpr) -> Option<Value> {
    match expr {
        ScalarExpr::Literal(Value::Null) => None,
        ScalarExpr::Literal(Value::Float64(f)) if f.is_nan() => None,
        ScalarExpr::Literal(value) => Some(value.clone()),
        _ => None,
    }
}

fn comparison_domain(op: BinaryOp, value: Value) -> Option<Domain> {
    match op {
        BinaryOp::Eq => Some(Domain::single_value(value)),
        BinaryOp::Lt => Some(Domain::of_range(ValueRange::less_than(value))),
        BinaryOp::Lte => Some(Domain::of_range(ValueRange::at_most(value))),
        BinaryOp::Gt => Some(Domain::of_range(ValueRange::greater_than(value))),
        BinaryOp::Gte => Some(Domain::of_range(ValueRange::at_least(value))),
        // The complement of a point is not a single range.
        BinaryOp::Neq => None,
        _ => None,
    }
}
