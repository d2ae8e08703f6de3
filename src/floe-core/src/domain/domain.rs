//! Single-column value domains.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::ValueRange;
use crate::types::Value;

/// Set of values a single column may take.
///
/// `All` and `None` are the lattice top and bottom. `Values` is a finite
/// enumeration kept sorted and deduplicated so structurally equal domains
/// compare equal. `Range` is one contiguous interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    /// Every value is allowed.
    All,
    /// No value is allowed.
    None,
    /// One of a finite set of values.
    Values(Vec<Value>),
    /// Any value inside a contiguous range.
    Range(ValueRange),
}

impl Domain {
    /// Build a domain from an enumeration of allowed values.
    ///
    /// Values are sorted and deduplicated; an empty enumeration collapses
    /// to [`Domain::None`].
    pub fn of_values(values: impl IntoIterator<Item = Value>) -> Self {
        let mut values: Vec<Value> = values.into_iter().collect();
        values.sort_by(|a, b| a.compare(b).unwrap_or(Ordering::Equal));
        values.dedup();
        if values.is_empty() {
            Domain::None
        } else {
            Domain::Values(values)
        }
    }

    /// Build a single-value domain.
    pub fn single_value(value: impl Into<Value>) -> Self {
        Domain::Values(vec![value.into()])
    }

    /// Build a range domain, collapsing empty and unbounded ranges.
    pub fn of_range(range: ValueRange) -> Self {
        if range.is_empty() {
            Domain::None
        } else if range.is_unbounded() {
            Domain::All
        } else {
            Domain::Range(range)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Domain::All)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Domain::None)
    }

    /// Check whether a value satisfies this domain.
    pub fn contains_value(&self, value: &Value) -> bool {
        match self {
            Domain::All => true,
            Domain::None => false,
            Domain::Values(values) => values.contains(value),
            Domain::Range(range) => range.contains(value),
        }
    }

    /// Intersect two domains.
    ///
    /// The result accepts exactly the values accepted by both operands.
    pub fn intersect(&self, other: &Self) -> Self {
        match (self, other) {
            (Domain::All, d) | (d, Domain::All) => d.clone(),
            (Domain::None, _) | (_, Domain::None) => Domain::None,
            (Domain::Values(a), Domain::Values(b)) => {
                Domain::of_values(a.iter().filter(|v| b.contains(v)).cloned())
            }
            (Domain::Values(values), Domain::Range(range))
            | (Domain::Range(range), Domain::Values(values)) => {
                Domain::of_values(values.iter().filter(|v| range.contains(v)).cloned())
            }
            (Domain::Range(a), Domain::Range(b)) => match a.intersect(b) {
                Some(range) => Domain::of_range(range),
                None => Domain::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_values_canonicalizes() {
        let a = Domain::of_values([Value::Int64(3), Value::Int64(1), Value::Int64(3)]);
        let b = Domain::of_values([Value::Int64(1), Value::Int64(3)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_of_values_empty_is_none() {
        assert!(Domain::of_values([]).is_none());
    }

    #[test]
    fn test_of_range_collapses_sentinels() {
        assert!(Domain::of_range(ValueRange::all()).is_all());
        let empty = ValueRange {
            low: Some(Value::Int64(9)),
            low_inclusive: true,
            high: Some(Value::Int64(1)),
            high_inclusive: true,
        };
        assert!(Domain::of_range(empty).is_none());
    }

    #[test]
    fn test_intersect_with_sentinels() {
        let values = Domain::of_values([Value::Int64(1), Value::Int64(2)]);
        assert_eq!(Domain::All.intersect(&values), values);
        assert_eq!(Domain::None.intersect(&values), Domain::None);
    }

    #[test]
    fn test_intersect_values_with_range() {
        let values = Domain::of_values([Value::Int64(1), Value::Int64(5), Value::Int64(9)]);
        let range = Domain::Range(ValueRange::between(2i64, 6i64));
        assert_eq!(values.intersect(&range), Domain::single_value(5i64));
    }

    #[test]
    fn test_intersect_disjoint_values() {
        let a = Domain::of_values([Value::Int64(1)]);
        let b = Domain::of_values([Value::Int64(2)]);
        assert_eq!(a.intersect(&b), Domain::None);
    }

    #[test]
    fn test_intersect_ranges() {
        let a = Domain::Range(ValueRange::at_least(10i64));
        let b = Domain::Range(ValueRange::less_than(20i64));
        let meet = a.intersect(&b);
        let expected = ValueRange {
            low: Some(Value::Int64(10)),
            low_inclusive: true,
            high: Some(Value::Int64(20)),
            high_inclusive: false,
        };
        assert_eq!(meet, Domain::Range(expected));
    }

    #[test]
    fn test_contains_value() {
        let domain = Domain::of_values([Value::String("eu".into()), Value::String("us".into())]);
        assert!(domain.contains_value(&Value::String("eu".into())));
        assert!(!domain.contains_value(&Value::String("ap".into())));
    }
}
