//! Subfield paths into nested columns.

use serde::{Deserialize, Serialize};

/// One step of a subfield path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PathElement {
    /// Struct field access by name.
    Field(String),
    /// Array element access by index.
    Index(i64),
    /// Map value access by string key.
    Key(String),
}

/// Reference to a column or a nested element inside it.
///
/// An empty path refers to the whole column. A non-empty path navigates
/// struct fields, array indices, and map keys in order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Subfield {
    /// Root column name.
    pub root: String,
    /// Path steps below the root; empty means the whole column.
    pub path: Vec<PathElement>,
}

impl Subfield {
    /// Reference a whole column.
    pub fn column(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: Vec::new(),
        }
    }

    /// Reference a nested element below a column.
    pub fn nested(root: impl Into<String>, path: Vec<PathElement>) -> Self {
        Self {
            root: root.into(),
            path,
        }
    }

    /// Check whether this subfield refers to the entire column.
    pub fn is_whole_column(&self) -> bool {
        self.path.is_empty()
    }

    /// Extend the path with a struct-field step.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.path.push(PathElement::Field(name.into()));
        self
    }
}

impl std::fmt::Display for Subfield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)?;
        for step in &self.path {
            match step {
                PathElement::Field(name) => write!(f, ".{name}")?,
                PathElement::Index(i) => write!(f, "[{i}]")?,
                PathElement::Key(k) => write!(f, "[\"{k}\"]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_column() {
        let sub = Subfield::column("region");
        assert!(sub.is_whole_column());
        assert_eq!(sub.to_string(), "region");
    }

    #[test]
    fn test_nested_path_display() {
        let sub = Subfield::nested(
            "address",
            vec![
                PathElement::Field("geo".to_string()),
                PathElement::Index(0),
                PathElement::Key("lat".to_string()),
            ],
        );
        assert!(!sub.is_whole_column());
        assert_eq!(sub.to_string(), "address.geo[0][\"lat\"]");
    }

    #[test]
    fn test_field_builder() {
        let sub = Subfield::column("event").field("payload").field("kind");
        assert_eq!(sub.path.len(), 2);
        assert_eq!(sub.to_string(), "event.payload.kind");
    }
}
