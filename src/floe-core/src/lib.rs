//! Core data model for the Floe query planner.
//!
//! This crate provides the fundamental types for plan-time constraints:
//! - `Value` and `DataType` for the type system
//! - `ColumnHandle` and `Subfield` for column references
//! - `Domain`, `ValueRange`, and `TupleDomain` for constraint algebra

pub mod domain;
pub mod proptest_utils;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use domain::{Domain, TupleDomain, ValueRange};
pub use schema::{ColumnHandle, PathElement, Subfield};
pub use types::{DataType, Value};
