use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators.
///
/// The enum is wider than the filter grammar on purpose: callers build
/// predicates with the full operator vocabulary, and the compiler rejects
/// every member without a filter token instead of guessing a lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOp {
    // Comparison
    /// Equal (`==`)
    Eq,
    /// Not equal (`!=`)
    NotEq,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    LtEq,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    GtEq,

    // Logical
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,

    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Modulo (`%`)
    Modulo,
}

impl BinOp {
    /// Token used for this operator in the emitted filter expression.
    ///
    /// `None` means the filter grammar has no lowering for the operator;
    /// the compiler surfaces that as an unsupported-operator error, never
    /// as a silent default.
    pub fn filter_token(self) -> Option<&'static str> {
        match self {
            BinOp::Eq => Some("eq"),
            BinOp::Gt => Some("gt"),
            BinOp::GtEq => Some("ge"),
            BinOp::Lt => Some("lt"),
            BinOp::LtEq => Some("le"),
            BinOp::And => Some("and"),
            BinOp::Or => Some("or"),
            BinOp::NotEq
            | BinOp::Add
            | BinOp::Subtract
            | BinOp::Multiply
            | BinOp::Divide
            | BinOp::Modulo => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Lt => "<",
            BinOp::LtEq => "<=",
            BinOp::Gt => ">",
            BinOp::GtEq => ">=",
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Modulo => "%",
        };
        write!(f, "{}", symbol)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// Logical negation (`!`)
    Not,
    /// Arithmetic negation (`-`)
    Negate,
}

impl UnaryOp {
    /// Token used for this operator in the emitted filter expression.
    ///
    /// Logical negation is the only unary operator the grammar defines.
    pub fn filter_token(self) -> Option<&'static str> {
        match self {
            UnaryOp::Not => Some("not"),
            UnaryOp::Negate => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        };
        write!(f, "{}", symbol)
    }
}
