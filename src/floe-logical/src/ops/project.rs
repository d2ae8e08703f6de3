//! Projection operator.

use serde::{Deserialize, Serialize};

use crate::expr::ScalarExpr;
use crate::ops::PlanNode;

/// Projection operator, producing one output symbol per expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectNode {
    /// Input operator.
    pub input: Box<PlanNode>,
    /// Output symbol and defining expression, in output order.
    pub projections: Vec<(String, ScalarExpr)>,
}

impl ProjectNode {
    /// Create a projection over an input.
    pub fn new(input: PlanNode, projections: Vec<(String, ScalarExpr)>) -> Self {
        Self {
            input: Box::new(input),
            projections,
        }
    }

    /// Project a set of pass-through columns.
    pub fn columns(input: PlanNode, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let projections = names
            .into_iter()
            .map(Into::into)
            .map(|name| (name.clone(), ScalarExpr::column(name)))
            .collect();
        Self::new(input, projections)
    }
}
