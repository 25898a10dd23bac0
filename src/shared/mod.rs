//! JSON object helpers shared by the payload-shaping domains.

use serde_json::{Map, Value};

/// A caller-supplied or SDK-built JSON object.
pub type JsonObject = Map<String, Value>;

/// Overlay `overlay` onto `base`. Keys present in both take the overlay value.
pub fn merge_into(base: &mut JsonObject, overlay: JsonObject) {
    for (k, v) in overlay {
        base.insert(k, v);
    }
}

/// Insert `default` under `key` unless the key is already present.
///
/// An explicit `null` counts as present.
pub fn ensure_key(obj: &mut JsonObject, key: &str, default: Value) {
    obj.entry(key.to_string()).or_insert(default);
}

/// Convert any JSON value into an object. Non-objects become an empty map.
pub fn into_object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}
