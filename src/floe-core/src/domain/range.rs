//! Contiguous value ranges.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// A contiguous range of values with optional bounds.
///
/// A missing bound is unbounded on that side. Endpoints are compared with
/// [`Value::compare`]; ranges over incomparable endpoints are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound, unbounded if absent.
    pub low: Option<Value>,
    /// Whether the lower bound itself is included.
    pub low_inclusive: bool,
    /// Upper bound, unbounded if absent.
    pub high: Option<Value>,
    /// Whether the upper bound itself is included.
    pub high_inclusive: bool,
}

impl ValueRange {
    /// Range accepting every value.
    pub fn all() -> Self {
        Self {
            low: None,
            low_inclusive: false,
            high: None,
            high_inclusive: false,
        }
    }

    /// Range `[low, +inf)`.
    pub fn at_least(low: impl Into<Value>) -> Self {
        Self {
            low: Some(low.into()),
            low_inclusive: true,
            high: None,
            high_inclusive: false,
        }
    }

    /// Range `(low, +inf)`.
    pub fn greater_than(low: impl Into<Value>) -> Self {
        Self {
            low: Some(low.into()),
            low_inclusive: false,
            high: None,
            high_inclusive: false,
        }
    }

    /// Range `(-inf, high]`.
    pub fn at_most(high: impl Into<Value>) -> Self {
        Self {
            low: None,
            low_inclusive: false,
            high: Some(high.into()),
            high_inclusive: true,
        }
    }

    /// Range `(-inf, high)`.
    pub fn less_than(high: impl Into<Value>) -> Self {
        Self {
            low: None,
            low_inclusive: false,
            high: Some(high.into()),
            high_inclusive: false,
        }
    }

    /// Closed range `[low, high]`.
    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self {
            low: Some(low.into()),
            low_inclusive: true,
            high: Some(high.into()),
            high_inclusive: true,
        }
    }

    /// Check whether both sides are unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// Check whether no value can satisfy this range.
    pub fn is_empty(&self) -> bool {
        let (Some(low), Some(high)) = (&self.low, &self.high) else {
            return false;
        };
        match low.compare(high) {
            Some(Ordering::Less) => false,
            Some(Ordering::Equal) => !(self.low_inclusive && self.high_inclusive),
            // Inverted or incomparable endpoints admit no value.
            Some(Ordering::Greater) | None => true,
        }
    }

    /// Check whether a value falls inside this range.
    ///
    /// Incomparable values (type mismatch, null, NaN) are outside.
    pub fn contains(&self, value: &Value) -> bool {
        if let Some(low) = &self.low {
            match value.compare(low) {
                Some(Ordering::Greater) => {}
                Some(Ordering::Equal) if self.low_inclusive => {}
                _ => return false,
            }
        }
        if let Some(high) = &self.high {
            match value.compare(high) {
                Some(Ordering::Less) => {}
                Some(Ordering::Equal) if self.high_inclusive => {}
                _ => return false,
            }
        }
        true
    }

    /// Intersect two ranges, returning `None` when the result is empty.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let (low, low_inclusive) = tighter_bound(
            self.low.as_ref(),
            self.low_inclusive,
            other.low.as_ref(),
            other.low_inclusive,
            Ordering::Greater,
        )?;
        let (high, high_inclusive) = tighter_bound(
            self.high.as_ref(),
            self.high_inclusive,
            other.high.as_ref(),
            other.high_inclusive,
            Ordering::Less,
        )?;

        let result = Self {
            low: low.cloned(),
            low_inclusive,
            high: high.cloned(),
            high_inclusive,
        };
        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }
}

/// Pick the tighter of two optional bounds.
///
/// `keep` is the ordering under which the first bound wins (`Greater` for
/// lower bounds, `Less` for upper bounds). Incomparable bounds yield `None`,
/// which the caller maps to the empty range.
#[allow(clippy::type_complexity)]
fn tighter_bound<'a>(
    a: Option<&'a Value>,
    a_inclusive: bool,
    b: Option<&'a Value>,
    b_inclusive: bool,
    keep: Ordering,
) -> Option<(Option<&'a Value>, bool)> {
    match (a, b) {
        (None, None) => Some((None, false)),
        (Some(v), None) => Some((Some(v), a_inclusive)),
        (None, Some(v)) => Some((Some(v), b_inclusive)),
        (Some(av), Some(bv)) => match av.compare(bv)? {
            Ordering::Equal => Some((Some(av), a_inclusive && b_inclusive)),
            ord if ord == keep => Some((Some(av), a_inclusive)),
            _ => Some((Some(bv), b_inclusive)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let range = ValueRange::between(10i64, 20i64);
        assert!(range.contains(&Value::Int64(10)));
        assert!(range.contains(&Value::Int64(15)));
        assert!(range.contains(&Value::Int64(20)));
        assert!(!range.contains(&Value::Int64(21)));
        assert!(!range.contains(&Value::String("15".into())));
    }

    #[test]
    fn test_exclusive_bounds() {
        let range = ValueRange::greater_than(5i64);
        assert!(!range.contains(&Value::Int64(5)));
        assert!(range.contains(&Value::Int64(6)));

        let range = ValueRange::less_than("m");
        assert!(range.contains(&Value::String("a".into())));
        assert!(!range.contains(&Value::String("m".into())));
    }

    #[test]
    fn test_emptiness() {
        assert!(!ValueRange::all().is_empty());
        assert!(!ValueRange::between(1i64, 1i64).is_empty());

        let inverted = ValueRange {
            low: Some(Value::Int64(5)),
            low_inclusive: true,
            high: Some(Value::Int64(1)),
            high_inclusive: true,
        };
        assert!(inverted.is_empty());

        let half_open_point = ValueRange {
            low: Some(Value::Int64(3)),
            low_inclusive: true,
            high: Some(Value::Int64(3)),
            high_inclusive: false,
        };
        assert!(half_open_point.is_empty());
    }

    #[test]
    fn test_intersect_overlap() {
        let a = ValueRange::at_least(10i64);
        let b = ValueRange::at_most(20i64);
        let meet = a.intersect(&b).unwrap();
        assert_eq!(meet, ValueRange::between(10i64, 20i64));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = ValueRange::less_than(5i64);
        let b = ValueRange::greater_than(7i64);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn test_intersect_mixed_types_is_empty() {
        let a = ValueRange::at_least(5i64);
        let b = ValueRange::at_most("zzz");
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn test_intersect_equal_bounds_inclusivity() {
        let a = ValueRange::at_least(5i64);
        let b = ValueRange::greater_than(5i64);
        let meet = a.intersect(&b).unwrap();
        assert!(!meet.low_inclusive);
    }
}
