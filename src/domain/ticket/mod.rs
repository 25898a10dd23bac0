//! Ticket-open events — `POST /webtracking/dropformOpenTicket`.

pub mod client;

use serde_json::Value;

use crate::client_data::ClientData;
use crate::shared::{ensure_key, merge_into, JsonObject};

pub const KEY_TICKET: &str = "ticket";
pub const KEY_ORGANIZE_ID: &str = "organizeId";

/// Shape the body sent to `/webtracking/dropformOpenTicket`.
///
/// `ticket` always ends up an object carrying `organizeId` (default `""`).
/// A missing or non-object `ticket` is replaced. Client data is merged at
/// the top level.
pub fn build_ticket_payload(body: JsonObject, client_data: ClientData) -> JsonObject {
    let mut payload = body;

    let ticket = match payload.remove(KEY_TICKET) {
        Some(Value::Object(mut ticket)) => {
            ensure_key(&mut ticket, KEY_ORGANIZE_ID, Value::String(String::new()));
            ticket
        }
        _ => {
            let mut ticket = JsonObject::new();
            ticket.insert(KEY_ORGANIZE_ID.into(), Value::String(String::new()));
            ticket
        }
    };
    payload.insert(KEY_TICKET.into(), Value::Object(ticket));

    merge_into(&mut payload, client_data.into_object());
    payload
}
