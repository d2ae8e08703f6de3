//! Property-based testing utilities for floe-core.
//!
//! This module provides proptest strategies for core types to enable
//! property-based testing of the constraint algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::{Domain, TupleDomain, ValueRange};
    use crate::types::{DataType, Value};

    // =========================================================================
    // Arbitrary Strategies for Value
    // =========================================================================

    /// Strategy for generating arbitrary Value instances that roundtrip through JSON.
    /// Uses integer-representable floats to avoid JSON precision issues.
    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int64),
            any::<i32>().prop_map(|i| Value::Float64(f64::from(i))),
            "[a-zA-Z0-9]{0,50}".prop_map(Value::String),
            prop::collection::vec(any::<u8>(), 0..100).prop_map(Value::Binary),
            any::<i64>().prop_map(Value::Timestamp),
            any::<i32>().prop_map(Value::Date),
        ]
    }

    /// Strategy for generating comparable integer values on a small range so
    /// that intersections are frequently non-trivial.
    fn arb_int_value() -> impl Strategy<Value = Value> {
        (-50i64..50).prop_map(Value::Int64)
    }

    /// Strategy for generating integer-valued domains.
    fn arb_int_domain() -> impl Strategy<Value = Domain> {
        prop_oneof![
            Just(Domain::All),
            Just(Domain::None),
            prop::collection::vec(arb_int_value(), 1..8).prop_map(Domain::of_values),
            (-50i64..0, 0i64..50)
                .prop_map(|(lo, hi)| Domain::of_range(ValueRange::between(lo, hi))),
        ]
    }

    /// Strategy for generating arbitrary DataType instances.
    fn arb_data_type() -> impl Strategy<Value = DataType> {
        prop_oneof![
            Just(DataType::Null),
            Just(DataType::Bool),
            Just(DataType::Int64),
            Just(DataType::Float64),
            Just(DataType::String),
            Just(DataType::Binary),
            Just(DataType::Timestamp),
            Just(DataType::Date),
        ]
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        /// Test that Value serialization roundtrips correctly.
        #[test]
        fn value_serde_roundtrip(value in arb_value()) {
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: Value = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(value, deserialized);
        }

        /// Test that DataType serialization roundtrips correctly.
        #[test]
        fn data_type_serde_roundtrip(dt in arb_data_type()) {
            let serialized = serde_json::to_string(&dt).unwrap();
            let deserialized: DataType = serde_json::from_str(&serialized).unwrap();
            prop_assert_eq!(dt, deserialized);
        }

        /// Test that Value comparison is antisymmetric where defined.
        #[test]
        fn value_compare_antisymmetric(a in arb_int_value(), b in arb_int_value()) {
            let forward = a.compare(&b);
            let backward = b.compare(&a);
            prop_assert_eq!(forward.map(|o| o.reverse()), backward);
        }

        /// Test that domain intersection is commutative.
        #[test]
        fn domain_intersect_commutative(a in arb_int_domain(), b in arb_int_domain()) {
            prop_assert_eq!(a.intersect(&b), b.intersect(&a));
        }

        /// Test that All is the identity of domain intersection.
        #[test]
        fn domain_intersect_all_identity(d in arb_int_domain()) {
            prop_assert_eq!(Domain::All.intersect(&d), d);
        }

        /// Test that None absorbs domain intersection.
        #[test]
        fn domain_intersect_none_absorbs(d in arb_int_domain()) {
            prop_assert!(Domain::None.intersect(&d).is_none());
        }

        /// Test that intersection never admits a value both operands reject.
        #[test]
        fn domain_intersect_sound(
            a in arb_int_domain(),
            b in arb_int_domain(),
            probe in arb_int_value()
        ) {
            let meet = a.intersect(&b);
            if meet.contains_value(&probe) {
                prop_assert!(a.contains_value(&probe));
                prop_assert!(b.contains_value(&probe));
            }
        }

        /// Test that of_values output does not depend on input order.
        #[test]
        fn domain_of_values_order_insensitive(
            mut values in prop::collection::vec(arb_int_value(), 0..8)
        ) {
            let forward = Domain::of_values(values.clone());
            values.reverse();
            let backward = Domain::of_values(values);
            prop_assert_eq!(forward, backward);
        }

        /// Test that tuple-domain intersection with the all-constraint is identity.
        #[test]
        fn tuple_intersect_all_identity(
            entries in prop::collection::btree_map("[a-c]", arb_int_domain(), 0..3)
        ) {
            let constraint = TupleDomain::from_domains(entries);
            let meet = constraint.intersect(&TupleDomain::all());
            prop_assert_eq!(meet, constraint);
        }

        /// Test that tuple-domain intersection is commutative.
        #[test]
        fn tuple_intersect_commutative(
            left in prop::collection::btree_map("[a-c]", arb_int_domain(), 0..3),
            right in prop::collection::btree_map("[a-c]", arb_int_domain(), 0..3)
        ) {
            let left = TupleDomain::from_domains(left);
            let right = TupleDomain::from_domains(right);
            prop_assert_eq!(left.intersect(&right), right.intersect(&left));
        }

        /// Test that transform_keys never constrains more keys than the input.
        #[test]
        fn tuple_transform_keys_shrinks(
            entries in prop::collection::btree_map("[a-f]", arb_int_domain(), 0..5),
            keep in prop::collection::btree_set("[a-f]", 0..5)
        ) {
            let constraint = TupleDomain::from_domains(entries);
            let before = constraint.constrained_keys().len();
            let mapped =
                constraint.transform_keys(|k| keep.contains(k).then(|| k.clone()));
            if !mapped.is_none() {
                prop_assert!(mapped.constrained_keys().len() <= before);
            }
        }
    }
}
