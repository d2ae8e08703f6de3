//! Physical column handles.

use serde::{Deserialize, Serialize};

use crate::types::DataType;

/// Handle to a physical column of a table.
///
/// The id is assigned by the table schema and stays stable across renames
/// and schema evolution; partition specs reference columns by this id.
/// Handles are immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnHandle {
    /// Stable column id from the table schema.
    pub id: i32,
    /// Column name at the current schema version.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
}

impl ColumnHandle {
    /// Create a new column handle.
    pub fn new(id: i32, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            id,
            name: name.into(),
            data_type,
        }
    }
}

impl std::fmt::Display for ColumnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_by_id() {
        let a = ColumnHandle::new(1, "z", DataType::Int64);
        let b = ColumnHandle::new(2, "a", DataType::Int64);
        assert!(a < b);
    }

    #[test]
    fn test_display() {
        let col = ColumnHandle::new(3, "region", DataType::String);
        assert_eq!(col.to_string(), "region#3");
    }
}
