//! Partition specs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::transform::PartitionTransform;

/// One field of a partition spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionField {
    /// Id of the source column in the table schema.
    pub source_id: i32,
    /// Id of this partition field, unique within the table.
    pub field_id: i32,
    /// Partition field name.
    pub name: String,
    /// Transform applied to the source column.
    pub transform: PartitionTransform,
}

impl PartitionField {
    /// Create a new partition field.
    pub fn new(
        source_id: i32,
        field_id: i32,
        name: impl Into<String>,
        transform: PartitionTransform,
    ) -> Self {
        Self {
            source_id,
            field_id,
            name: name.into(),
            transform,
        }
    }
}

/// Layout of a table's data files at some point in its history.
///
/// Tables keep every spec they have ever written under; data files written
/// under an old spec stay laid out by that spec until rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSpec {
    /// Spec identifier, unique within the table.
    pub spec_id: i32,
    /// Partition fields in declaration order.
    pub fields: Vec<PartitionField>,
}

impl PartitionSpec {
    /// Create a new partition spec.
    pub fn new(spec_id: i32, fields: Vec<PartitionField>) -> Self {
        Self { spec_id, fields }
    }

    /// The spec of an unpartitioned table.
    pub fn unpartitioned(spec_id: i32) -> Self {
        Self {
            spec_id,
            fields: Vec::new(),
        }
    }

    /// Check whether this spec has no partition fields.
    pub fn is_unpartitioned(&self) -> bool {
        self.fields.is_empty()
    }

    /// Source column ids partitioned by identity under this spec.
    ///
    /// A constraint on one of these columns prunes whole partitions of
    /// files written under this spec; constraints on any other column
    /// cannot be enforced by the layout.
    pub fn identity_source_ids(&self) -> BTreeSet<i32> {
        self.fields
            .iter()
            .filter(|field| field.transform.is_identity())
            .map(|field| field.source_id)
            .collect()
    }
}
