//! Decoding of configuration server payloads
//!
//! A successful response carries a JSON object of properties. Some servers
//! deliver that object JSON-encoded inside a string, which takes a second
//! parse. Values are flattened to strings:
//! - strings are kept verbatim
//! - numbers and booleans use their JSON text (`5` → `"5"`)
//! - `null` entries are dropped
//! - arrays and objects use their compact JSON text

use clientconfig_domain::{ClientConfigError, PropertyMap, Result};
use serde_json::{Map, Value};

/// Decode a response body into a property map.
///
/// # Errors
/// Returns `ClientConfigError::Parse` if the body is not a JSON object or a
/// JSON string containing one.
pub fn decode_properties(body: &str) -> Result<PropertyMap> {
    match parse(body)? {
        Value::Object(map) => Ok(flatten(map)),
        Value::String(inner) => match parse(&inner)? {
            Value::Object(map) => Ok(flatten(map)),
            other => Err(unexpected("encoded payload", &other)),
        },
        other => Err(unexpected("payload", &other)),
    }
}

fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text)
        .map_err(|e| ClientConfigError::Parse(format!("Invalid JSON payload: {e}")))
}

fn flatten(map: Map<String, Value>) -> PropertyMap {
    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect()
}

fn unexpected(what: &str, value: &Value) -> ClientConfigError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    ClientConfigError::Parse(format!("Expected JSON object in {what}, found {kind}"))
}
