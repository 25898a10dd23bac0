//! Low-level HTTP client — `ConnectXHttp`.
//!
//! Two operations: fetch a raw body with GET (the cookie endpoint) and POST a
//! JSON object with a bearer token (the tracking endpoints). No retries; each
//! call is a single request.

use crate::error::HttpError;
use crate::network::Endpoint;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Connect-X tracking API.
#[derive(Debug, Clone)]
pub struct ConnectXHttp {
    api_url: String,
    client: Client,
}

impl ConnectXHttp {
    pub fn new(
        api_url: &str,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Absolute URL for a tracking endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_url, endpoint.path())
    }

    // ── Requests ─────────────────────────────────────────────────────────

    /// GET `url` and return the body bytes of a 2xx response.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let url = parse_url(url)?;
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(status_error(status.as_u16(), resp).await);
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// POST `body` as JSON to `url` with `Authorization: Bearer <token>`.
    ///
    /// The response body is not parsed; any 2xx status is success.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        token: &str,
        body: &B,
    ) -> Result<(), HttpError> {
        let url = parse_url(url)?;
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .json(body)
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "Tracking request accepted");
            return Ok(());
        }

        Err(status_error(status.as_u16(), resp).await)
    }
}

fn parse_url(url: &str) -> Result<Url, HttpError> {
    Url::parse(url).map_err(|e| HttpError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

async fn status_error(status: u16, resp: reqwest::Response) -> HttpError {
    let body = resp.text().await.unwrap_or_default();
    HttpError::Status { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(api_url: &str) -> ConnectXHttp {
        ConnectXHttp::new(api_url, None, "connectx-sdk/test").unwrap()
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = http("https://api.example.com/connectx/api/");
        assert_eq!(client.api_url(), "https://api.example.com/connectx/api");
        assert_eq!(
            client.endpoint_url(Endpoint::DropForm),
            "https://api.example.com/connectx/api/webtracking/dropform"
        );
    }

    #[test]
    fn test_parse_url_rejects_relative() {
        let err = parse_url("abc/webtracking").unwrap_err();
        assert!(matches!(err, HttpError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_post_to_invalid_url_fails_before_sending() {
        let client = http("abc");
        let url = client.endpoint_url(Endpoint::WebTracking);
        let err = client
            .post_json(&url, "token", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::InvalidUrl { .. }));
    }
}
