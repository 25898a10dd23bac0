//! Cookie provider — fetches the session cookie for each tracking call.
//!
//! Every call re-fetches. The cookie string is returned verbatim; its format
//! and expiry are the backend's concern.

use serde_json::Value;

use crate::error::CookieError;
use crate::http::ConnectXHttp;

/// Issues the cookie-generation request.
#[derive(Debug, Clone)]
pub struct CookieProvider {
    http: ConnectXHttp,
    url: String,
}

impl CookieProvider {
    pub fn new(http: ConnectXHttp, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the cookie endpoint and extract its `"cookie"` field.
    pub async fn fetch(&self) -> Result<String, CookieError> {
        let body = self.http.get_bytes(&self.url).await?;
        let cookie = parse_cookie_response(&body)?;
        tracing::debug!(len = cookie.len(), "Fetched session cookie");
        Ok(cookie)
    }
}

/// Extract the cookie from a cookie-endpoint response body.
///
/// The body must be a JSON object with a string `"cookie"` field. Other
/// fields are ignored.
pub fn parse_cookie_response(body: &[u8]) -> Result<String, CookieError> {
    if body.is_empty() {
        return Err(CookieError::EmptyResponse);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| CookieError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let Value::Object(mut obj) = value else {
        return Err(CookieError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    };

    match obj.remove("cookie") {
        Some(Value::String(cookie)) => Ok(cookie),
        Some(other) => Err(CookieError::MalformedResponse(format!(
            "\"cookie\" is not a string: {}",
            other
        ))),
        None => Err(CookieError::MalformedResponse(
            "missing \"cookie\" field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie_ok() {
        let body = br#"{"cookie": "sess-1", "ip": "10.0.0.1"}"#;
        assert_eq!(parse_cookie_response(body).unwrap(), "sess-1");
    }

    #[test]
    fn test_parse_cookie_empty_body() {
        assert!(matches!(
            parse_cookie_response(b""),
            Err(CookieError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_cookie_not_json() {
        assert!(matches!(
            parse_cookie_response(b"<html>502 Bad Gateway</html>"),
            Err(CookieError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_cookie_not_object() {
        assert!(matches!(
            parse_cookie_response(br#"["sess-1"]"#),
            Err(CookieError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_cookie_missing_or_wrong_type() {
        assert!(matches!(
            parse_cookie_response(br#"{"session": "sess-1"}"#),
            Err(CookieError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_cookie_response(br#"{"cookie": 42}"#),
            Err(CookieError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_cookie_response(br#"{"cookie": null}"#),
            Err(CookieError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_cookie_verbatim() {
        let body = br#"{"cookie": "  a=b; Path=/  "}"#;
        assert_eq!(parse_cookie_response(body).unwrap(), "  a=b; Path=/  ");
    }
}
