//! Table metadata layer for the Floe query planner.
//!
//! This crate models the table format the planner rewrites scans over:
//! - `TableHandle` and `TransactionId` for resolved table references
//! - `PartitionSpec` and `PartitionTransform` for data layout
//! - `Snapshot` and `TableMetadata` for table history
//! - `MetadataProvider` and `TransactionCatalog` for metadata access

pub mod catalog;
pub mod handle;
pub mod metadata;
pub mod snapshot;
pub mod spec;
pub mod transform;

// Re-export commonly used types
pub use catalog::TransactionCatalog;
pub use handle::{TableHandle, TransactionId};
pub use metadata::{MetadataProvider, TableMetadata};
pub use snapshot::{Snapshot, SnapshotId};
pub use spec::{PartitionField, PartitionSpec};
pub use transform::PartitionTransform;
