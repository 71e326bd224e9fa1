use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A captured value carried inside a predicate tree.
///
/// Captured values are concrete data known at tree-construction time:
/// either the terminal operand of a comparison, or the root object of a
/// nested field-access chain that the compiler resolves at compile time.
///
/// `Object` is the only composite kind. Every other variant is a terminal
/// scalar with a defined filter-literal encoding (see [`crate::encode`]).
///
/// # Examples
///
/// ```
/// use ofilter::Value;
/// use std::collections::HashMap;
///
/// // Scalar captures
/// let name = Value::String("Tom".to_string());
/// let amount = Value::Integer(1000);
/// let discount = Value::Boolean(false);
///
/// // A composite capture, resolved through field-access chains
/// let mut order = HashMap::new();
/// order.insert("Customer".to_string(), name);
/// order.insert("Amount".to_string(), amount);
/// let order = Value::Object(order);
/// assert!(order.is_composite());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// Absent value, encoded as the bare text `null`
    Null,

    /// Boolean, encoded lowercase (`true`/`false`)
    Boolean(bool),

    /// Integer number
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Exact decimal number
    Decimal(Decimal),

    /// UTF-8 string, encoded wrapped in single quotes
    String(String),

    /// Point in time, normalized to UTC on construction and encoded as
    /// `datetime'YYYY-MM-DDTHH:mm:ss.fffZ'`
    DateTime(DateTime<Utc>),

    /// Composite with named fields; resolvable but never encodable
    Object(HashMap<String, Value>),
}

impl Value {
    /// Human-readable kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Object(_) => "object",
        }
    }

    /// True for values that hold further fields rather than a scalar.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Read a named field off a composite value.
    ///
    /// Returns `None` both for a missing field and for a scalar receiver;
    /// the compiler distinguishes the two cases in its error messages via
    /// [`Value::is_composite`].
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(name),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    /// Date/time captures are normalized to UTC up front so the encoder
    /// never has to carry offset information.
    fn from(dt: DateTime<Tz>) -> Self {
        Value::DateTime(dt.with_timezone(&Utc))
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(fields: HashMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}
