//! Request parameter cleanup.

use serde_json::{Map, Value};

use crate::utils::text::trim_js;

/// Copy `params`, dropping entries that carry no usable value.
///
/// A string is dropped when it is blank after trimming or is the literal
/// `"null"`; `null` itself is dropped. Numbers, booleans, arrays and objects
/// always survive, including `0`, `false` and empty containers.
pub fn filter_empty_params(params: &Map<String, Value>) -> Map<String, Value> {
    params
        .iter()
        .filter(|(_, value)| !is_empty_param(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn is_empty_param(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => trim_js(text).is_empty() || text == "null",
        _ => false,
    }
}
