//! Behaviour events — `POST /webtracking`.

pub mod client;

use serde_json::Value;

use crate::client_data::ClientData;
use crate::shared::{ensure_key, merge_into, JsonObject};

/// Behaviour field; defaults to `""` when the caller leaves it out.
pub const KEY_BEHAVIOR: &str = "cx_behavior";

/// Builder for a behaviour event body.
///
/// Any `JsonObject` works as an event body; this only saves spelling out
/// the behaviour key.
#[derive(Debug, Clone, Default)]
pub struct TrackEvent {
    inner: JsonObject,
}

impl TrackEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event with `cx_behavior` set.
    pub fn behavior(behavior: impl Into<String>) -> Self {
        let behavior: String = behavior.into();
        Self::new().property(KEY_BEHAVIOR, behavior)
    }

    pub fn property<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.inner.insert(key.into(), value.into());
        self
    }
}

impl From<TrackEvent> for JsonObject {
    fn from(event: TrackEvent) -> Self {
        event.inner
    }
}

/// Shape the body sent to `/webtracking`: caller fields, a default behaviour,
/// then client data on top.
pub fn build_event_payload(body: JsonObject, client_data: ClientData) -> JsonObject {
    let mut payload = body;
    ensure_key(&mut payload, KEY_BEHAVIOR, Value::String(String::new()));
    merge_into(&mut payload, client_data.into_object());
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::into_object;
    use serde_json::json;

    fn client_data() -> ClientData {
        ClientData {
            is_browser: false,
            language: "en".into(),
            fingerprint: None,
            user_agent: "ua".into(),
            cookie: "sess-1".into(),
            time_spent_secs: 0,
        }
    }

    #[test]
    fn test_behavior_defaults_to_empty() {
        let payload = build_event_payload(into_object(json!({"action": "click"})), client_data());
        assert_eq!(
            Value::Object(payload),
            json!({
                "action": "click",
                "cx_behavior": "",
                "cx_isBrowser": false,
                "cx_language": "en",
                "cx_userAgent": "ua",
                "cx_cookie": "sess-1",
                "cx_timespent": 0
            })
        );
    }

    #[test]
    fn test_behavior_kept_when_present() {
        let body: JsonObject = TrackEvent::behavior("view_product").property("sku", "A-1").into();
        let payload = build_event_payload(body, client_data());
        assert_eq!(payload[KEY_BEHAVIOR], "view_product");
        assert_eq!(payload["sku"], "A-1");
    }

    #[test]
    fn test_client_data_overrides_caller_keys() {
        let body = into_object(json!({
            "cx_cookie": "forged",
            "cx_isBrowser": true,
            "cx_timespent": 999
        }));
        let payload = build_event_payload(body, client_data());
        assert_eq!(payload["cx_cookie"], "sess-1");
        assert_eq!(payload["cx_isBrowser"], false);
        assert_eq!(payload["cx_timespent"], 0);
    }
}
