//! Filter-literal encoding for captured values.
//!
//! This module lowers terminal scalars to their textual form in the
//! filter grammar:
//!
//! - **Strings** are wrapped in single quotes verbatim. Embedded single
//!   quotes are *not* escaped; the downstream query layer owns escaping.
//! - **Date/times** are emitted as `datetime'YYYY-MM-DDTHH:mm:ss.fffZ'`
//!   with millisecond precision. Values are already UTC (normalization
//!   happens when the [`Value`] is constructed).
//! - **Booleans** are emitted lowercase (`true`/`false`).
//! - **Numbers and null** use their default display conversion.
//!
//! Composite values have no literal form and fail with
//! [`CompileError::CompositeValue`]; the compiler's path resolver
//! descends captures to a terminal scalar before calling in here, so the
//! error only fires for predicates that capture an object without
//! accessing any of its fields.
//!
//! # Examples
//!
//! ```
//! use ofilter::encode::encode;
//! use ofilter::Value;
//!
//! assert_eq!(encode(&Value::String("Tom".into())).unwrap(), "'Tom'");
//! assert_eq!(encode(&Value::Boolean(false)).unwrap(), "false");
//! assert_eq!(encode(&Value::Integer(1000)).unwrap(), "1000");
//! ```

use crate::compiler::CompileError;
use crate::value::Value;

/// Encodes a terminal scalar as a filter literal.
pub fn encode(value: &Value) -> Result<String, CompileError> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Integer(n) => Ok(n.to_string()),
        Value::Float(n) => Ok(n.to_string()),
        Value::Decimal(d) => Ok(d.to_string()),
        Value::String(s) => Ok(format!("'{}'", s)),
        Value::DateTime(dt) => Ok(format!(
            "datetime'{}'",
            dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        )),
        Value::Object(_) => Err(CompileError::CompositeValue(format!(
            "{} value has no filter literal form",
            value.kind()
        ))),
    }
}
