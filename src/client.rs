//! High-level client — `ConnectXClient` with nested sub-client accessors.
//!
//! Each tracking domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session state, the final POST,
//! and the boolean/callback entry points for hosts that only want a
//! success flag.

use crate::client_data::ClientDataCollector;
use crate::config::{SdkConfig, SessionState};
use crate::cookie::CookieProvider;
use crate::domain::event::client::Events;
use crate::domain::form::client::Forms;
use crate::domain::form::IdentifyRequest;
use crate::domain::ticket::client::Tickets;
use crate::error::SdkError;
use crate::http::ConnectXHttp;
use crate::network::Endpoint;
use crate::platform::{desktop::sdk_user_agent, DesktopPlatform, Platform};
use crate::shared::JsonObject;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::event::client::Events as EventsClient;
pub use crate::domain::form::client::Forms as FormsClient;
pub use crate::domain::ticket::client::Tickets as TicketsClient;

/// The primary entry point for the Connect-X tracking SDK.
///
/// Cheap to clone; clones share the session (token + clock).
///
/// ```rust,ignore
/// let client = ConnectXClient::builder().build()?;
/// client.initialize("abc123").await;
///
/// client.events().track(TrackEvent::behavior("click")).await?;
/// ```
#[derive(Clone)]
pub struct ConnectXClient {
    pub(crate) http: ConnectXHttp,
    pub(crate) session: SessionState,
    pub(crate) collector: ClientDataCollector,
}

impl ConnectXClient {
    pub fn builder() -> ConnectXClientBuilder {
        ConnectXClientBuilder::default()
    }

    /// Set the bearer token and restart the session clock.
    ///
    /// May be called any number of times; only the latest token is used.
    pub async fn initialize(&self, token: impl Into<String>) {
        self.session.initialize(token).await;
    }

    /// Current token and session start.
    pub async fn config(&self) -> SdkConfig {
        self.session.snapshot().await
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }

    pub fn forms(&self) -> Forms<'_> {
        Forms { client: self }
    }

    pub fn tickets(&self) -> Tickets<'_> {
        Tickets { client: self }
    }

    /// Collect client data without sending anything.
    pub async fn client_data(&self) -> Result<crate::client_data::ClientData, SdkError> {
        Ok(self.collector.collect().await?)
    }

    /// POST a fully shaped payload to a tracking endpoint.
    pub(crate) async fn submit(
        &self,
        endpoint: Endpoint,
        payload: &JsonObject,
    ) -> Result<(), SdkError> {
        let url = self.http.endpoint_url(endpoint);
        let token = self.session.token().await;
        if token.is_empty() {
            tracing::warn!(%endpoint, "Submitting without a token; call initialize first");
        }

        self.http.post_json(&url, &token, payload).await?;
        tracing::debug!(%endpoint, "Tracking event delivered");
        Ok(())
    }

    // ── Boolean entry points ─────────────────────────────────────────────
    //
    // Errors are logged and collapsed to `false`. Use the sub-clients to get
    // the structured error instead.

    /// [`Events::track`] reporting only success.
    pub async fn track_event(&self, body: impl Into<JsonObject>) -> bool {
        report("track_event", self.events().track(body).await)
    }

    /// [`Forms::identify`] reporting only success.
    pub async fn identify(
        &self,
        key: &str,
        customers: JsonObject,
        tracking: JsonObject,
        form: Option<JsonObject>,
        options: JsonObject,
    ) -> bool {
        let request = IdentifyRequest {
            key: key.to_string(),
            customers,
            tracking,
            form,
            options,
        };
        report("identify", self.forms().identify(request).await)
    }

    /// [`Tickets::open`] reporting only success.
    pub async fn open_ticket(&self, body: impl Into<JsonObject>) -> bool {
        report("open_ticket", self.tickets().open(body).await)
    }

    // ── Callback entry points ────────────────────────────────────────────
    //
    // Each spawns the call onto the current Tokio runtime and invokes the
    // callback exactly once with the outcome. The returned handle can be
    // awaited or dropped; dropping it does not cancel the request.

    pub fn track_event_with_callback<F>(
        &self,
        body: JsonObject,
        callback: F,
    ) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            callback(client.track_event(body).await);
        })
    }

    pub fn identify_with_callback<F>(
        &self,
        request: IdentifyRequest,
        callback: F,
    ) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let ok = report("identify", client.forms().identify(request).await);
            callback(ok);
        })
    }

    pub fn open_ticket_with_callback<F>(
        &self,
        body: JsonObject,
        callback: F,
    ) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            callback(client.open_ticket(body).await);
        })
    }
}

fn report(operation: &'static str, result: Result<(), SdkError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(operation, kind = ?e.kind(), error = %e, "Tracking call failed");
            false
        }
    }
}

impl std::fmt::Debug for ConnectXClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectXClient")
            .field("api_url", &self.http.api_url())
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ConnectXClientBuilder {
    api_url: String,
    cookie_url: String,
    timeout: Option<Duration>,
    token: Option<String>,
    platform: Option<Arc<dyn Platform>>,
}

impl Default for ConnectXClientBuilder {
    fn default() -> Self {
        Self {
            api_url: crate::network::DEFAULT_API_URL.to_string(),
            cookie_url: crate::network::DEFAULT_COOKIE_URL.to_string(),
            timeout: None,
            token: None,
            platform: None,
        }
    }
}

impl ConnectXClientBuilder {
    /// Base URL the tracking endpoint paths are appended to.
    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    pub fn cookie_url(mut self, url: &str) -> Self {
        self.cookie_url = url.to_string();
        self
    }

    /// Per-request timeout. Defaults to reqwest's (none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pre-set the token, equivalent to calling `initialize` right after
    /// `build`.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Source of language, fingerprint and user agent. Defaults to
    /// [`DesktopPlatform`].
    pub fn platform(mut self, platform: impl Platform + 'static) -> Self {
        self.platform = Some(Arc::new(platform));
        self
    }

    pub fn build(self) -> Result<ConnectXClient, SdkError> {
        if self.cookie_url.is_empty() {
            return Err(SdkError::Config("cookie URL must not be empty".into()));
        }

        let http = ConnectXHttp::new(&self.api_url, self.timeout, &sdk_user_agent())?;
        let session = SessionState::new(SdkConfig::new(self.token.unwrap_or_default()));
        let platform: Arc<dyn Platform> = match self.platform {
            Some(platform) => platform,
            None => Arc::new(DesktopPlatform),
        };
        let cookies = CookieProvider::new(http.clone(), self.cookie_url);

        Ok(ConnectXClient {
            collector: ClientDataCollector::new(platform, cookies, session.clone()),
            http,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, HttpError};
    use crate::platform::StaticPlatform;

    #[test]
    fn test_builder_defaults() {
        let client = ConnectXClient::builder().build().unwrap();
        assert_eq!(client.http.api_url(), crate::network::DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_rejects_empty_cookie_url() {
        let err = ConnectXClient::builder().cookie_url("").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[tokio::test]
    async fn test_builder_token_preinitializes() {
        let client = ConnectXClient::builder().token("pre").build().unwrap();
        assert_eq!(client.config().await.token, "pre");

        client.initialize("post").await;
        assert_eq!(client.config().await.token, "post");
    }

    #[tokio::test]
    async fn test_invalid_cookie_url_is_collection_failure() {
        let client = ConnectXClient::builder()
            .cookie_url("not a url")
            .platform(StaticPlatform::new("ua"))
            .build()
            .unwrap();

        let err = client.events().track(JsonObject::new()).await.unwrap_err();
        assert!(err.is_collection());
        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
        assert!(!client.track_event(JsonObject::new()).await);
    }

    #[test]
    fn test_report_collapses_errors() {
        assert!(report("t", Ok(())));
        let err = SdkError::Http(HttpError::Status {
            status: 500,
            body: String::new(),
        });
        assert!(!report("t", Err(err)));
    }
}
