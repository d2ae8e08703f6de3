//! Data type definitions for Floe schemas.

use serde::{Deserialize, Serialize};

/// Data type for schema columns.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Null type (unknown or absent).
    Null,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point.
    Float64,
    /// UTF-8 string.
    String,
    /// Binary data.
    Binary,
    /// Timestamp with microsecond precision.
    Timestamp,
    /// Date (days since epoch).
    Date,
    /// Struct with named fields.
    Struct(Vec<(String, DataType)>),
    /// Array of elements with specified type.
    Array(Box<Self>),
    /// Map from string keys to values.
    Map(Box<Self>),
}

impl DataType {
    /// Check if this type is numeric.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }

    /// Check if this type is a temporal type.
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Timestamp | Self::Date)
    }

    /// Check if this type has nested structure.
    ///
    /// Value-range constraints only apply to non-nested columns; constraints
    /// on fields inside these types stay above the scan.
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Struct(_) | Self::Array(_) | Self::Map(_))
    }

    /// Get the display name for this type.
    pub fn display_name(&self) -> String {
        match self {
            Self::Null => "Null".to_string(),
            Self::Bool => "Bool".to_string(),
            Self::Int64 => "Int64".to_string(),
            Self::Float64 => "Float64".to_string(),
            Self::String => "String".to_string(),
            Self::Binary => "Binary".to_string(),
            Self::Timestamp => "Timestamp".to_string(),
            Self::Date => "Date".to_string(),
            Self::Struct(fields) => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(name, ty)| format!("{name}: {}", ty.display_name()))
                    .collect();
                format!("Struct<{}>", inner.join(", "))
            }
            Self::Array(inner) => format!("Array<{}>", inner.display_name()),
            Self::Map(value) => format!("Map<String, {}>", value.display_name()),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nested() {
        assert!(!DataType::Int64.is_nested());
        assert!(DataType::Array(Box::new(DataType::Int64)).is_nested());
        assert!(DataType::Struct(vec![("f".to_string(), DataType::Int64)]).is_nested());
        assert!(DataType::Map(Box::new(DataType::String)).is_nested());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            DataType::Array(Box::new(DataType::Int64)).display_name(),
            "Array<Int64>"
        );
        assert_eq!(
            DataType::Struct(vec![("x".to_string(), DataType::Float64)]).display_name(),
            "Struct<x: Float64>"
        );
    }
}
