//! Form identify ("drop form") events — `POST /webtracking/dropform`.

pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client_data::ClientData;
use crate::shared::{merge_into, JsonObject};

/// Arguments of an identify call.
///
/// Client data is merged into `tracking`, not into the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifyRequest {
    pub key: String,
    pub customers: JsonObject,
    pub tracking: JsonObject,
    /// Sent as `{}` when `None`.
    pub form: Option<JsonObject>,
    pub options: JsonObject,
}

impl IdentifyRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn customers(mut self, customers: impl Into<JsonObject>) -> Self {
        self.customers = customers.into();
        self
    }

    pub fn tracking(mut self, tracking: impl Into<JsonObject>) -> Self {
        self.tracking = tracking.into();
        self
    }

    pub fn form(mut self, form: impl Into<JsonObject>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn options(mut self, options: impl Into<JsonObject>) -> Self {
        self.options = options.into();
        self
    }
}

/// Shape the body sent to `/webtracking/dropform`.
pub fn build_identify_payload(request: IdentifyRequest, client_data: ClientData) -> JsonObject {
    let IdentifyRequest {
        key,
        customers,
        mut tracking,
        form,
        options,
    } = request;

    merge_into(&mut tracking, client_data.into_object());

    let mut payload = JsonObject::new();
    payload.insert("key".into(), Value::String(key));
    payload.insert("customers".into(), Value::Object(customers));
    payload.insert("tracking".into(), Value::Object(tracking));
    payload.insert("form".into(), Value::Object(form.unwrap_or_default()));
    payload.insert("options".into(), Value::Object(options));
    payload
}
