use serde::{Deserialize, Serialize};

use crate::ast::{BinOp, UnaryOp};
use crate::value::Value;

/// Abstract Syntax Tree node representing a boolean predicate.
///
/// A predicate is built by the caller, handed to
/// [`Compiler::compile`](crate::Compiler::compile), and lowered to a
/// `$filter` expression string. The tree is immutable during compilation.
///
/// Every [`Predicate::Field`] chain must bottom out either at
/// [`Predicate::Param`] (a server-side field reference, emitted as raw
/// text) or at a [`Predicate::Capture`] (a concrete value, resolved and
/// literal-encoded). Chains rooted anywhere else are malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    /// Binary operation: a comparison or a logical connective
    ///
    /// # Examples
    /// ```text
    /// Amount > 1000        // Binary { op: Gt, .. }
    /// a and b              // Binary { op: And, .. }
    /// ```
    Binary {
        op: BinOp,
        left: Box<Predicate>,
        right: Box<Predicate>,
    },

    /// Unary operation; logical negation is the only compilable one
    Unary {
        op: UnaryOp,
        operand: Box<Predicate>,
    },

    /// Field access: read field `name` off whatever `base` denotes
    ///
    /// # Examples
    /// ```text
    /// x.Amount             // Field { base: Param, name: "Amount" }
    /// order.Customer       // Field { base: Capture(order), name: "Customer" }
    /// ```
    Field {
        base: Box<Predicate>,
        name: String,
    },

    /// The bound entity parameter — the thing being filtered
    Param,

    /// A concrete value supplied by the caller's environment
    Capture(Value),
}

impl Predicate {
    /// Binary node from parts.
    pub fn binary(op: BinOp, left: Predicate, right: Predicate) -> Self {
        Predicate::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    // --- Logical connectives ---

    pub fn and(left: Predicate, right: Predicate) -> Self {
        Self::binary(BinOp::And, left, right)
    }

    pub fn or(left: Predicate, right: Predicate) -> Self {
        Self::binary(BinOp::Or, left, right)
    }

    pub fn not(operand: Predicate) -> Self {
        Predicate::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }
    }

    // --- Comparisons ---

    pub fn eq(left: Predicate, right: Predicate) -> Self {
        Self::binary(BinOp::Eq, left, right)
    }

    pub fn gt(left: Predicate, right: Predicate) -> Self {
        Self::binary(BinOp::Gt, left, right)
    }

    pub fn ge(left: Predicate, right: Predicate) -> Self {
        Self::binary(BinOp::GtEq, left, right)
    }

    pub fn lt(left: Predicate, right: Predicate) -> Self {
        Self::binary(BinOp::Lt, left, right)
    }

    pub fn le(left: Predicate, right: Predicate) -> Self {
        Self::binary(BinOp::LtEq, left, right)
    }

    // --- Leaves ---

    /// A server-side field on the filtered entity: `x.name`.
    pub fn field(name: impl Into<String>) -> Self {
        Predicate::Field {
            base: Box::new(Predicate::Param),
            name: name.into(),
        }
    }

    /// A captured value.
    pub fn capture(value: impl Into<Value>) -> Self {
        Predicate::Capture(value.into())
    }

    /// Read a field off this node, extending a field-access chain.
    ///
    /// # Examples
    /// ```
    /// use ofilter::{Predicate, Value};
    /// use std::collections::HashMap;
    ///
    /// let order = HashMap::from([("Amount".to_string(), Value::from(1000))]);
    /// let amount = Predicate::capture(order).access("Amount");
    /// ```
    pub fn access(self, name: impl Into<String>) -> Self {
        Predicate::Field {
            base: Box::new(self),
            name: name.into(),
        }
    }
}
