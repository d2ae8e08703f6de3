//! Column handles and subfield paths.

mod column;
mod subfield;

pub use column::ColumnHandle;
pub use subfield::{PathElement, Subfield};
