//! Filter operator.

use serde::{Deserialize, Serialize};

use crate::expr::ScalarExpr;
use crate::ops::PlanNode;

/// Filter operator, keeping rows whose predicate evaluates to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterNode {
    /// Input operator.
    pub input: Box<PlanNode>,
    /// Row predicate.
    pub predicate: ScalarExpr,
}

impl FilterNode {
    /// Create a filter over an input.
    pub fn new(input: PlanNode, predicate: ScalarExpr) -> Self {
        Self {
            input: Box::new(input),
            predicate,
        }
    }
}
