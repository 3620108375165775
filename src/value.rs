//! Helpers over generic JSON-like values.

// third-party imports
use serde_json::{Map, Value};

// ---

/// Generates a separate copy of `value` sharing no container state with
/// the source.
///
/// Objects and arrays are rebuilt recursively; scalar leaves are copied by
/// value.
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), deep_copy(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(deep_copy).collect()),
        other => other.clone(),
    }
}

/// Returns the key array for the map, sorted ascending.
pub fn sorted_keys(map: &Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<_> = map.keys().cloned().collect();
    keys.sort();
    keys
}
