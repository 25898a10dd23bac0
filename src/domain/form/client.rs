//! Forms sub-client — customer identify events.

use crate::client::ConnectXClient;
use crate::domain::form::{build_identify_payload, IdentifyRequest};
use crate::error::SdkError;
use crate::network::Endpoint;

pub struct Forms<'a> {
    pub(crate) client: &'a ConnectXClient,
}

impl<'a> Forms<'a> {
    /// Identify a customer from a submitted form.
    ///
    /// Client data is merged into `request.tracking`; the body is posted to
    /// `/webtracking/dropform`.
    pub async fn identify(&self, request: IdentifyRequest) -> Result<(), SdkError> {
        tracing::debug!(
            tracking_fields = request.tracking.len(),
            has_form = request.form.is_some(),
            "Sending identify event"
        );

        let client_data = self.client.collector.collect().await?;
        let payload = build_identify_payload(request, client_data);
        self.client.submit(Endpoint::DropForm, &payload).await
    }
}
