//! Typed decoding of loosely typed result lists.
//!
//! Some methods return arrays whose elements the node does not describe in
//! advance. Each element is decoded against the concrete record type and the
//! first mismatch fails the whole call with the expected and observed types.

use crate::error::RpcError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON type name of `value`, used in mismatch errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode every element of `values` as `T`.
pub fn decode_list<T: DeserializeOwned>(
    values: Vec<Value>,
    expected: &'static str,
) -> Result<Vec<T>, RpcError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let found = json_kind(&value);
            serde_json::from_value(value).map_err(|e| RpcError::UnexpectedType {
                expected,
                found: found.to_string(),
                detail: format!("element {index}: {e}"),
            })
        })
        .collect()
}
