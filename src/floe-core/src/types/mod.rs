//! Type system for Floe plan-time values.

mod data_type;
mod value;

pub use data_type::DataType;
pub use value::Value;
