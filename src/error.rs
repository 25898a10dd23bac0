//! Unified SDK error types.
//!
//! Every layer has its own enum; [`SdkError`] is what the sub-clients return.
//! The boolean entry points on [`crate::client::ConnectXClient`] log these and
//! collapse them to `false`.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Client data collection failed: {0}")]
    Collection(#[from] CollectionError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Cookie endpoint errors.
#[derive(Error, Debug)]
pub enum CookieError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Cookie endpoint returned an empty body")]
    EmptyResponse,

    #[error("Malformed cookie response: {0}")]
    MalformedResponse(String),
}

/// Errors raised while assembling client data.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("User agent unavailable: {0}")]
    UserAgent(String),

    #[error("Cookie fetch failed: {0}")]
    Cookie(#[from] CookieError),
}

/// Coarse classification of an [`SdkError`], for hosts that only want to
/// branch on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    Network,
    Status,
    EmptyResponse,
    MalformedResponse,
    Collection,
    Other,
}

impl HttpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::Network(_) => ErrorKind::Network,
            Self::Status { .. } => ErrorKind::Status,
        }
    }
}

impl CookieError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(e) => e.kind(),
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}

impl SdkError {
    /// Failure category. Collection failures report the underlying cookie
    /// cause when there is one.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(e) => e.kind(),
            Self::Collection(CollectionError::Cookie(e)) => e.kind(),
            Self::Collection(CollectionError::UserAgent(_)) => ErrorKind::Collection,
            Self::Config(_) => ErrorKind::Other,
        }
    }

    /// Whether the failure happened before the event POST was attempted.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_error_reports_cookie_cause() {
        let err: SdkError = CollectionError::Cookie(CookieError::EmptyResponse).into();
        assert!(err.is_collection());
        assert_eq!(err.kind(), ErrorKind::EmptyResponse);

        let err: SdkError =
            CollectionError::Cookie(CookieError::MalformedResponse("no cookie".into())).into();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_user_agent_failure_is_collection_kind() {
        let err: SdkError = CollectionError::UserAgent("webview gone".into()).into();
        assert_eq!(err.kind(), ErrorKind::Collection);
    }

    #[test]
    fn test_status_error_kind_and_display() {
        let err: SdkError = HttpError::Status {
            status: 503,
            body: "unavailable".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Status);
        assert!(!err.is_collection());
        assert_eq!(err.to_string(), "HTTP error: Server returned 503: unavailable");
    }

    #[test]
    fn test_invalid_url_through_cookie_layer() {
        let err = CookieError::Http(HttpError::InvalidUrl {
            url: "abc/webtracking".into(),
            reason: "relative URL without a base".into(),
        });
        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
    }
}
