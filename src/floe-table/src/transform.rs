//! Partition transforms.

use serde::{Deserialize, Serialize};

/// Function applied to a source column to derive a partition value.
///
/// Only `Identity` preserves the full value of the source column; every
/// other transform loses information, so a partition laid out under it
/// cannot fully enforce a constraint on the source column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionTransform {
    /// Partition on the source value itself.
    Identity,
    /// Hash the source value into the given number of buckets.
    Bucket(u32),
    /// Truncate the source value to the given width.
    Truncate(u32),
    /// Extract the year from a date or timestamp.
    Year,
    /// Extract the month from a date or timestamp.
    Month,
    /// Extract the day from a date or timestamp.
    Day,
    /// Extract the hour from a timestamp.
    Hour,
    /// Always produce null; used to retire a partition field.
    Void,
}

impl PartitionTransform {
    /// Check whether the transform preserves the source value.
    pub fn is_identity(&self) -> bool {
        matches!(self, PartitionTransform::Identity)
    }
}

impl std::fmt::Display for PartitionTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartitionTransform::Identity => write!(f, "identity"),
            PartitionTransform::Bucket(n) => write!(f, "bucket[{n}]"),
            PartitionTransform::Truncate(w) => write!(f, "truncate[{w}]"),
            PartitionTransform::Year => write!(f, "year"),
            PartitionTransform::Month => write!(f, "month"),
            PartitionTransform::Day => write!(f, "day"),
            PartitionTransform::Hour => write!(f, "hour"),
            PartitionTransform::Void => write!(f, "void"),
        }
    }
}
