//! Expression trees for logical plans.

mod binary;
mod scalar;

pub use binary::BinaryOp;
pub use scalar::{col, lit, ScalarExpr, UnaryOp};
