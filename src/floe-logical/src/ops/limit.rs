//! Limit operator.

use serde::{Deserialize, Serialize};

use crate::ops::PlanNode;

/// Limit operator, truncating the input to at most `limit` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitNode {
    /// Input operator.
    pub input: Box<PlanNode>,
    /// Maximum number of rows to produce.
    pub limit: u64,
}

impl LimitNode {
    /// Create a limit over an input.
    pub fn new(input: PlanNode, limit: u64) -> Self {
        Self {
            input: Box::new(input),
            limit,
        }
    }
}
