//! Scalar expression tree.

use serde::{Deserialize, Serialize};

use floe_core::types::Value;

use super::BinaryOp;

/// Unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical NOT.
    Not,
    /// Numeric negation.
    Neg,
    /// Is null check.
    IsNull,
    /// Is not null check.
    IsNotNull,
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "NOT"),
            Self::Neg => write!(f, "-"),
            Self::IsNull => write!(f, "IS NULL"),
            Self::IsNotNull => write!(f, "IS NOT NULL"),
        }
    }
}

/// Scalar expression in a query plan.
///
/// Columns are referenced by the symbol name the enclosing plan assigns
/// them; a scan's assignment map resolves symbols to physical columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarExpr {
    /// Column reference by symbol name.
    Column(String),
    /// Literal value.
    Literal(Value),
    /// Struct field access.
    GetField {
        base: Box<ScalarExpr>,
        name: String,
    },
    /// Binary operation.
    Binary {
        left: Box<ScalarExpr>,
        op: BinaryOp,
        right: Box<ScalarExpr>,
    },
    /// Unary operation.
    Unary { op: UnaryOp, expr: Box<ScalarExpr> },
    /// Membership test against a literal list.
    InList {
        expr: Box<ScalarExpr>,
        list: Vec<ScalarExpr>,
        negated: bool,
    },
    /// Function call.
    Call {
        name: String,
        args: Vec<ScalarExpr>,
    },
}

impl ScalarExpr {
    /// Create a column reference expression.
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    /// Create a literal expression.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a binary expression.
    pub fn binary(left: ScalarExpr, op: BinaryOp, right: ScalarExpr) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Create a unary expression.
    pub fn unary(op: UnaryOp, expr: ScalarExpr) -> Self {
        Self::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    /// Create a struct field access.
    pub fn get_field(self, name: impl Into<String>) -> Self {
        Self::GetField {
            base: Box::new(self),
            name: name.into(),
        }
    }

    /// Create a function call.
    pub fn call(name: impl Into<String>, args: Vec<ScalarExpr>) -> Self {
        Self::Call {
            name: name.into(),
            args,
        }
    }

    /// The literal TRUE predicate.
    pub fn true_literal() -> Self {
        Self::Literal(Value::Bool(true))
    }

    /// The literal FALSE predicate.
    pub fn false_literal() -> Self {
        Self::Literal(Value::Bool(false))
    }

    /// Check whether this expression is the literal TRUE.
    pub fn is_true_literal(&self) -> bool {
        matches!(self, Self::Literal(Value::Bool(true)))
    }

    /// Check whether this expression is the literal FALSE.
    pub fn is_false_literal(&self) -> bool {
        matches!(self, Self::Literal(Value::Bool(false)))
    }

    // Comparison operators

    /// Equality comparison.
    pub fn eq(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::Eq, other)
    }

    /// Inequality comparison.
    pub fn neq(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::Neq, other)
    }

    /// Greater than comparison.
    pub fn gt(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::Gt, other)
    }

    /// Greater than or equal comparison.
    pub fn gte(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::Gte, other)
    }

    /// Less than comparison.
    pub fn lt(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::Lt, other)
    }

    /// Less than or equal comparison.
    pub fn lte(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::Lte, other)
    }

    // Logical operators

    /// Logical AND.
    pub fn and(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::And, other)
    }

    /// Logical OR.
    pub fn or(self, other: ScalarExpr) -> Self {
        Self::binary(self, BinaryOp::Or, other)
    }

    /// Logical NOT.
    pub fn not(self) -> Self {
        Self::unary(UnaryOp::Not, self)
    }

    /// Membership test.
    pub fn in_list(self, list: Vec<ScalarExpr>) -> Self {
        Self::InList {
            expr: Box::new(self),
            list,
            negated: false,
        }
    }

    /// Negated membership test.
    pub fn not_in_list(self, list: Vec<ScalarExpr>) -> Self {
        Self::InList {
            expr: Box::new(self),
            list,
            negated: true,
        }
    }

    /// Is null check.
    pub fn is_null(self) -> Self {
        Self::unary(UnaryOp::IsNull, self)
    }

    /// Is not null check.
    pub fn is_not_null(self) -> Self {
        Self::unary(UnaryOp::IsNotNull, self)
    }

    /// Split a conjunction into its flattened conjuncts.
    ///
    /// Non-AND expressions come back as a single conjunct.
    pub fn conjuncts(&self) -> Vec<&ScalarExpr> {
        fn walk<'a>(expr: &'a ScalarExpr, out: &mut Vec<&'a ScalarExpr>) {
            match expr {
                ScalarExpr::Binary {
                    left,
                    op: BinaryOp::And,
                    right,
                } => {
                    walk(left, out);
                    walk(right, out);
                }
                other => out.push(other),
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Conjoin expressions, collapsing the empty conjunction to TRUE.
    pub fn and_all(exprs: impl IntoIterator<Item = ScalarExpr>) -> Self {
        exprs
            .into_iter()
            .reduce(|acc, expr| acc.and(expr))
            .unwrap_or_else(Self::true_literal)
    }
}

impl std::fmt::Display for ScalarExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column(name) => write!(f, "{name}"),
            Self::Literal(val) => write!(f, "{val:?}"),
            Self::GetField { base, name } => write!(f, "{base}.{name}"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Unary { op, expr } => write!(f, "{op} {expr}"),
            Self::InList {
                expr,
                list,
                negated,
            } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{expr} {not}IN ({} values)", list.len())
            }
            Self::Call { name, args } => write!(f, "{name}({} args)", args.len()),
        }
    }
}

/// Create a column reference expression.
pub fn col(name: impl Into<String>) -> ScalarExpr {
    ScalarExpr::column(name)
}

/// Create a literal expression.
pub fn lit(value: impl Into<Value>) -> ScalarExpr {
    ScalarExpr::literal(value)
}
