//! Tickets sub-client — open a support ticket from the app.

use crate::client::ConnectXClient;
use crate::domain::ticket::build_ticket_payload;
use crate::error::SdkError;
use crate::network::Endpoint;
use crate::shared::JsonObject;

pub struct Tickets<'a> {
    pub(crate) client: &'a ConnectXClient,
}

impl<'a> Tickets<'a> {
    /// Open a ticket. `body.ticket.organizeId` defaults to `""`.
    pub async fn open(&self, body: impl Into<JsonObject>) -> Result<(), SdkError> {
        let body = body.into();
        tracing::debug!(fields = body.len(), "Sending open-ticket event");

        let client_data = self.client.collector.collect().await?;
        let payload = build_ticket_payload(body, client_data);
        self.client.submit(Endpoint::DropFormOpenTicket, &payload).await
    }
}
