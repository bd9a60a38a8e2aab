//! JSON -> Sift Value conversion utilities

use super::CliError;
use crate::Value;

/// Convert serde_json::Value to a Sift Value.
///
/// Objects have no counterpart in the value space; only the top level of an
/// input document may be an object (see [`json_to_variables`]).
pub fn json_to_value(v: serde_json::Value) -> Result<Value, CliError> {
    match v {
        serde_json::Value::Null => Ok(Value::Nil),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| CliError::Input(format!("number {} does not fit in f64", n))),
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(json_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_json::Value::Object(_) => Err(CliError::Input(
            "nested objects are not supported; flatten them into top-level fields".to_string(),
        )),
    }
}

/// Convert a top-level JSON object into (name, value) pairs.
pub fn json_to_variables(v: serde_json::Value) -> Result<Vec<(String, Value)>, CliError> {
    match v {
        serde_json::Value::Object(obj) => obj
            .into_iter()
            .map(|(k, v)| Ok::<_, CliError>((k, json_to_value(v)?)))
            .collect(),
        other => Err(CliError::Input(format!(
            "input must be a JSON object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_fields() {
        let vars = json_to_variables(json!({"age": 18, "tags": ["a"]})).unwrap();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains(&("age".to_string(), Value::Number(18.0))));
        assert!(vars.contains(&("tags".to_string(), Value::from(vec!["a"]))));
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(json_to_variables(json!([1])), Err(CliError::Input(_))));
        assert!(matches!(
            json_to_variables(json!({"user": {"name": "x"}})),
            Err(CliError::Input(_))
        ));
    }
}
