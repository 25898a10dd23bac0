//! Client data — the `cx_*` property bag attached to every tracking event.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::config::SessionState;
use crate::cookie::CookieProvider;
use crate::error::CollectionError;
use crate::platform::{Platform, DEFAULT_LANGUAGE};
use crate::shared::{into_object, JsonObject};

// ─── Wire keys ───────────────────────────────────────────────────────────────

pub const KEY_IS_BROWSER: &str = "cx_isBrowser";
pub const KEY_LANGUAGE: &str = "cx_language";
pub const KEY_FINGERPRINT: &str = "cx_fingerprint";
pub const KEY_USER_AGENT: &str = "cx_userAgent";
pub const KEY_COOKIE: &str = "cx_cookie";
pub const KEY_TIME_SPENT: &str = "cx_timespent";

/// Snapshot of the client, built fresh for each tracking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientData {
    #[serde(rename = "cx_isBrowser")]
    pub is_browser: bool,
    #[serde(rename = "cx_language")]
    pub language: String,
    /// Absent from the wire (not `null`) when the platform has none.
    #[serde(
        rename = "cx_fingerprint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fingerprint: Option<String>,
    #[serde(rename = "cx_userAgent")]
    pub user_agent: String,
    #[serde(rename = "cx_cookie")]
    pub cookie: String,
    /// Whole seconds since the session started.
    #[serde(rename = "cx_timespent")]
    pub time_spent_secs: u64,
}

impl ClientData {
    /// The bag as a JSON object, ready to overlay onto an event payload.
    ///
    /// Keys come from the serde renames above; serializing plain strings,
    /// bools and integers cannot fail.
    pub fn into_object(self) -> JsonObject {
        into_object(serde_json::to_value(self).unwrap_or(Value::Null))
    }
}

impl From<ClientData> for JsonObject {
    fn from(data: ClientData) -> Self {
        data.into_object()
    }
}

// ─── Collector ───────────────────────────────────────────────────────────────

/// Assembles [`ClientData`]: platform properties, then the user agent, then
/// the cookie. Each step starts only after the previous one completed.
#[derive(Clone)]
pub struct ClientDataCollector {
    platform: Arc<dyn Platform>,
    cookies: CookieProvider,
    session: SessionState,
}

impl ClientDataCollector {
    pub fn new(platform: Arc<dyn Platform>, cookies: CookieProvider, session: SessionState) -> Self {
        Self {
            platform,
            cookies,
            session,
        }
    }

    pub async fn collect(&self) -> Result<ClientData, CollectionError> {
        let language = self
            .platform
            .language()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let fingerprint = self.platform.fingerprint();

        let user_agent = self.platform.user_agent().await?;

        let cookie = self.cookies.fetch().await.map_err(|e| {
            tracing::warn!(url = self.cookies.url(), error = %e, "Cookie fetch failed");
            e
        })?;

        let time_spent_secs = self.session.elapsed_secs().await;

        Ok(ClientData {
            is_browser: false,
            language,
            fingerprint,
            user_agent,
            cookie,
            time_spent_secs,
        })
    }
}

impl std::fmt::Debug for ClientDataCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientDataCollector")
            .field("cookies", &self.cookies)
            .finish_non_exhaustive()
    }
}
