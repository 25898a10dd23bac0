//! Events sub-client — generic behaviour tracking.

use crate::client::ConnectXClient;
use crate::domain::event::build_event_payload;
use crate::error::SdkError;
use crate::network::Endpoint;
use crate::shared::JsonObject;

pub struct Events<'a> {
    pub(crate) client: &'a ConnectXClient,
}

impl<'a> Events<'a> {
    /// Track a behaviour event.
    ///
    /// Collects client data (including a fresh cookie), merges it over `body`
    /// and posts the result to `/webtracking`. Nothing is posted if collection
    /// fails.
    pub async fn track(&self, body: impl Into<JsonObject>) -> Result<(), SdkError> {
        let body = body.into();
        tracing::debug!(fields = body.len(), "Tracking behaviour event");

        let client_data = self.client.collector.collect().await?;
        let payload = build_event_payload(body, client_data);
        self.client.submit(Endpoint::WebTracking, &payload).await
    }
}
