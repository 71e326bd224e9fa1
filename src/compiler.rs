//! Predicate-to-`$filter` compilation.
//!
//! The compiler performs a recursive descent over a [`Predicate`] tree
//! and accumulates the filter expression text. Binary and unary nodes are
//! lowered through the operator token table; field-access chains rooted
//! at the entity parameter are emitted as raw field names; chains rooted
//! at a captured value are resolved to a terminal scalar and
//! literal-encoded.
//!
//! Chain resolution uses a path stack: while descending the AST toward
//! the chain's root, each field name is pushed; once the captured root is
//! reached, names are popped back off and applied to the value one hop at
//! a time, which replays the chain in the correct order against the root
//! object. The stack lives only for the duration of a single chain and is
//! empty between chains.

use crate::ast::{BinOp, Predicate, UnaryOp};
use crate::encode::encode;
use crate::value::Value;

/// Errors that can occur while compiling a predicate.
///
/// All of them are structural violations of the input contract and abort
/// the current [`Compiler::compile`] call; none are recovered internally,
/// and no partial output escapes.
#[derive(Debug, Clone)]
pub enum CompileError {
    /// Operator with no token in the filter grammar
    UnsupportedOperator(String),

    /// Field missing while resolving a captured value
    UnknownField(String),

    /// Field-access chain rooted in an unsupported node, or a path that
    /// cannot be replayed against its root
    MalformedChain(String),

    /// Composite value reached the literal encoder
    CompositeValue(String),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnsupportedOperator(op) => {
                write!(f, "Unsupported operator: `{}` has no filter token", op)
            }
            CompileError::UnknownField(msg) => write!(f, "Unknown field: {}", msg),
            CompileError::MalformedChain(msg) => write!(f, "Malformed chain: {}", msg),
            CompileError::CompositeValue(msg) => write!(f, "Composite value: {}", msg),
        }
    }
}

impl std::error::Error for CompileError {}

/// Returns a human-readable kind name for a predicate node
fn node_kind(node: &Predicate) -> &'static str {
    match node {
        Predicate::Binary { .. } => "binary operation",
        Predicate::Unary { .. } => "unary operation",
        Predicate::Field { .. } => "field access",
        Predicate::Param => "entity parameter",
        Predicate::Capture(_) => "captured value",
    }
}

/// The predicate compiler.
///
/// Walks a predicate tree and produces the equivalent OData-style
/// `$filter` expression string.
///
/// A compiler instance holds only per-call state (the output buffer and
/// the path stack), reset at the start of every [`Compiler::compile`]
/// call, so one instance can be reused across independent predicates.
/// `compile` takes `&mut self`; sharing an instance across threads
/// requires external synchronization, same as any `&mut` API.
///
/// # Examples
///
/// ```
/// use ofilter::{Compiler, Predicate};
///
/// let predicate = Predicate::and(
///     Predicate::eq(Predicate::field("Customer"), Predicate::capture("Tom")),
///     Predicate::gt(Predicate::field("Amount"), Predicate::capture(1000)),
/// );
///
/// let mut compiler = Compiler::new();
/// let filter = compiler.compile(&predicate).unwrap();
/// assert_eq!(filter, "((Customer eq 'Tom') and (Amount gt 1000))");
/// ```
#[derive(Debug, Default)]
pub struct Compiler {
    /// Output accumulator for the filter expression
    query: String,
    /// Pending field names of the chain currently being resolved
    path: Vec<String>,
}

impl Compiler {
    /// Creates a new compiler with empty per-call state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles a predicate tree into a filter expression string.
    ///
    /// The same instance can compile further predicates afterwards;
    /// nothing carries over between calls.
    pub fn compile(&mut self, predicate: &Predicate) -> Result<String, CompileError> {
        self.query.clear();
        self.path.clear();

        self.visit(predicate)?;

        Ok(std::mem::take(&mut self.query))
    }

    fn visit(&mut self, node: &Predicate) -> Result<(), CompileError> {
        match node {
            Predicate::Binary { op, left, right } => self.visit_binary(*op, left, right),
            Predicate::Unary { op, operand } => self.visit_unary(*op, operand),
            Predicate::Field { base, name } => self.visit_field(base, name),
            Predicate::Capture(value) => self.visit_capture(value),
            Predicate::Param => Err(CompileError::MalformedChain(
                "the entity parameter is not an expression on its own".to_string(),
            )),
        }
    }

    /// Comparisons and logical connectives. Every binary node is wrapped
    /// in its own parentheses, regardless of precedence.
    fn visit_binary(
        &mut self,
        op: BinOp,
        left: &Predicate,
        right: &Predicate,
    ) -> Result<(), CompileError> {
        let token = op
            .filter_token()
            .ok_or_else(|| CompileError::UnsupportedOperator(op.to_string()))?;

        self.query.push('(');
        self.visit(left)?;
        self.query.push(' ');
        self.query.push_str(token);
        self.query.push(' ');
        self.visit(right)?;
        self.query.push(')');
        Ok(())
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Predicate) -> Result<(), CompileError> {
        let token = op
            .filter_token()
            .ok_or_else(|| CompileError::UnsupportedOperator(op.to_string()))?;

        self.query.push_str(token);
        self.query.push_str(" (");
        self.visit(operand)?;
        self.query.push(')');
        Ok(())
    }

    /// One link of a field-access chain.
    ///
    /// Chains over captured values are walked base-ward while the field
    /// names pile up on the path stack; the stack is consumed again in
    /// [`Compiler::resolve`] once the captured root is in hand. A chain
    /// that ends at the entity parameter instead names a server-side
    /// field and is emitted as-is.
    fn visit_field(&mut self, base: &Predicate, name: &str) -> Result<(), CompileError> {
        match base {
            Predicate::Field { .. } | Predicate::Capture(_) => {
                self.path.push(name.to_string());
                self.visit(base)
            }
            Predicate::Param => {
                if !self.path.is_empty() {
                    // x.Customer.Name: the names above `Customer` can
                    // never be replayed against a server-side field.
                    return Err(CompileError::MalformedChain(format!(
                        "cannot resolve `{}` through entity field `{}`",
                        self.path.join("."),
                        name
                    )));
                }
                self.query.push_str(name);
                Ok(())
            }
            other => Err(CompileError::MalformedChain(format!(
                "field `{}` accessed on a {}",
                name,
                node_kind(other)
            ))),
        }
    }

    /// A captured value, either standalone or as the root of the chain
    /// whose names are currently on the path stack.
    fn visit_capture(&mut self, value: &Value) -> Result<(), CompileError> {
        let terminal = self.resolve(value)?;
        let literal = encode(terminal)?;
        self.query.push_str(&literal);
        Ok(())
    }

    /// Walks the captured root outward through the pending field names.
    ///
    /// Names come back off the stack in root-to-leaf order (they were
    /// pushed leaf-to-root during AST descent), so each pop is one hop
    /// deeper into the captured object. The stack is empty when this
    /// returns.
    fn resolve<'v>(&mut self, root: &'v Value) -> Result<&'v Value, CompileError> {
        let mut current = root;
        while let Some(name) = self.path.pop() {
            current = match current.field(&name) {
                Some(next) => next,
                None if current.is_composite() => {
                    return Err(CompileError::UnknownField(format!(
                        "captured object has no field `{}`",
                        name
                    )));
                }
                None => {
                    return Err(CompileError::UnknownField(format!(
                        "field `{}` sought on a {} value",
                        name,
                        current.kind()
                    )));
                }
            };
        }
        Ok(current)
    }
}
