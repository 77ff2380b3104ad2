// File: crates/linegraph-core/src/config.rs
// Summary: Deep merge of partial JSON configuration and default-substituting repair passes.
// Notes:
// - Merge and repair work on `serde_json::Value` trees; typed configs round-trip through them.
// - Repairs never fail: a field that does not fit is replaced by the field from `defaults`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Overlay `src` onto `dst`.
///
/// Objects merge key by key, recursively; any other value (scalars, arrays, null) replaces the
/// destination wholesale. A non-object destination under an object source becomes an object.
pub fn merge(dst: &mut Value, src: &Value) {
    match src {
        Value::Object(src_map) => {
            if !dst.is_object() {
                *dst = Value::Object(Map::new());
            }
            if let Value::Object(dst_map) = dst {
                for (key, value) in src_map {
                    match value {
                        Value::Object(_) => merge(dst_map.entry(key.clone()).or_insert(Value::Null), value),
                        _ => {
                            dst_map.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
        }
        other => *dst = other.clone(),
    }
}

/// Make every leaf of `value` have the JSON shape of the matching leaf in `defaults`.
///
/// Integer defaults demand non-negative integers, other numbers demand numbers, and so on.
/// A `null` default accepts anything; such fields are checked by [`repair_as`]. Keys missing
/// from `value` are filled from `defaults`. Returns the number of replaced fields.
pub fn conform(value: &mut Value, defaults: &Value) -> usize {
    conform_at(value, defaults, &mut String::new())
}

fn conform_at(value: &mut Value, defaults: &Value, path: &mut String) -> usize {
    if let Value::Object(default_map) = defaults {
        let Value::Object(map) = value else {
            debug!(field = %display_path(path), "config object replaced by default");
            *value = defaults.clone();
            return 1;
        };
        let mut repaired = 0;
        for (key, default) in default_map {
            let len = path.len();
            path.push('/');
            path.push_str(key);
            match map.get_mut(key) {
                Some(v) => repaired += conform_at(v, default, path),
                None => {
                    map.insert(key.clone(), default.clone());
                }
            }
            path.truncate(len);
        }
        return repaired;
    }

    if same_shape(value, defaults) {
        return 0;
    }
    debug!(field = %display_path(path), got = %value, "config value replaced by default");
    *value = defaults.clone();
    1
}

fn same_shape(value: &Value, default: &Value) -> bool {
    match default {
        Value::Null => true,
        Value::Bool(_) => value.is_boolean(),
        Value::Number(n) if n.is_u64() => value.is_u64(),
        Value::Number(_) => value.is_number(),
        Value::String(_) => value.is_string(),
        Value::Array(_) => value.is_array(),
        Value::Object(_) => value.is_object(),
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

/// Check that the field at JSON `pointer` deserializes as `T`; otherwise copy it from `defaults`.
/// Returns true when the field was replaced.
pub fn repair_as<T: DeserializeOwned>(value: &mut Value, pointer: &str, defaults: &Value) -> bool {
    let Some(field) = value.pointer_mut(pointer) else {
        return false;
    };
    if serde_json::from_value::<T>(field.clone()).is_ok() {
        return false;
    }
    debug!(field = pointer, got = %field, "config value replaced by default");
    reset_field(value, pointer, defaults);
    true
}

/// Copy the field at `pointer` from `defaults`, whatever it currently holds.
pub fn reset_field(value: &mut Value, pointer: &str, defaults: &Value) {
    if let Some(field) = value.pointer_mut(pointer) {
        *field = defaults.pointer(pointer).cloned().unwrap_or(Value::Null);
    }
}

/// Serialize a typed config to its JSON tree.
pub fn to_tree<T: Serialize>(config: &T) -> Value {
    match serde_json::to_value(config) {
        Ok(v) => v,
        Err(err) => {
            warn!(%err, "config serialization failed");
            Value::Null
        }
    }
}

/// Deserialize a repaired tree, falling back to `fallback` if anything still does not fit.
pub fn from_tree<T: DeserializeOwned>(tree: Value, fallback: impl FnOnce() -> T) -> T {
    match serde_json::from_value(tree) {
        Ok(v) => v,
        Err(err) => {
            warn!(%err, "repaired config still invalid; using defaults");
            fallback()
        }
    }
}
