//! JSON output for Sift values.
//!
//! Values are converted to [`serde_json::Value`] and serialized either compactly
//! or pretty-printed with 2-space indentation.
//!
//! - Whole numbers print without a fractional part (`18`, not `18.0`)
//! - Non-finite numbers have no JSON form and become `null`
//! - Callables print as `"<fn name/arity>"`
//!
//! # Examples
//!
//! ```
//! use sift_lang::Value;
//! use sift_lang::output::{to_json_pretty, to_json_string};
//!
//! let value = Value::from(vec![1, 2]);
//!
//! assert_eq!(to_json_string(&value), "[1,2]");
//! assert_eq!(to_json_pretty(&value), "[\n  1,\n  2\n]");
//! ```

use serde_json::json;

use crate::value::Value;

/// Convert a value to JSON.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Nil => serde_json::Value::Null,
        Value::Bool(b) => json!(b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => json!(s),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Callable(_) | Value::Deferred(_) => json!(value.to_string()),
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        json!(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Compact JSON text.
pub fn to_json_string(value: &Value) -> String {
    to_json(value).to_string()
}

/// Pretty-printed JSON text.
pub fn to_json_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(&to_json(value)).unwrap_or_else(|_| to_json_string(value))
}
