//! Platform capabilities — locale, device fingerprint, user agent.
//!
//! The collector never branches on the target platform itself. It asks a
//! [`Platform`] implementation, chosen when the client is built:
//!
//! - [`DesktopPlatform`] (default): OS locale, a process-unique fingerprint,
//!   and the SDK's own HTTP user agent.
//! - [`StaticPlatform`]: fixed values supplied by the host. Use it to bridge a
//!   webview's `navigator.userAgent` or a mobile vendor identifier.

pub mod desktop;

pub use desktop::DesktopPlatform;

use async_trait::async_trait;

use crate::error::CollectionError;

/// Language code used when the platform cannot report one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Source of the client properties that depend on where the SDK runs.
#[async_trait]
pub trait Platform: Send + Sync {
    /// ISO 639-1 language code, if the platform exposes a locale.
    fn language(&self) -> Option<String>;

    /// Stable device or process identifier, if one is available.
    /// Returning `None` omits `cx_fingerprint` from the client data.
    fn fingerprint(&self) -> Option<String>;

    /// User-agent string. May suspend (e.g. evaluating script in a webview).
    async fn user_agent(&self) -> Result<String, CollectionError>;
}

/// A [`Platform`] that reports fixed values.
#[derive(Debug, Clone, Default)]
pub struct StaticPlatform {
    pub language: Option<String>,
    pub fingerprint: Option<String>,
    pub user_agent: String,
}

impl StaticPlatform {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            language: None,
            fingerprint: None,
            user_agent: user_agent.into(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }
}

#[async_trait]
impl Platform for StaticPlatform {
    fn language(&self) -> Option<String> {
        self.language.clone()
    }

    fn fingerprint(&self) -> Option<String> {
        self.fingerprint.clone()
    }

    async fn user_agent(&self) -> Result<String, CollectionError> {
        if self.user_agent.is_empty() {
            return Err(CollectionError::UserAgent("no user agent configured".into()));
        }
        Ok(self.user_agent.clone())
    }
}

/// Reduce a locale tag such as `en_US.UTF-8` or `pt-BR` to its lower-case
/// language subtag. `C`/`POSIX` style locales yield `None`.
pub fn language_code(locale: &str) -> Option<String> {
    let code = locale.split(['_', '-', '.', '@']).next()?.trim();
    if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(code.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_variants() {
        assert_eq!(language_code("en_US.UTF-8").as_deref(), Some("en"));
        assert_eq!(language_code("pt-BR").as_deref(), Some("pt"));
        assert_eq!(language_code("TH").as_deref(), Some("th"));
        assert_eq!(language_code("de@euro").as_deref(), Some("de"));
        assert_eq!(language_code(""), None);
        assert_eq!(language_code("C.UTF-8"), None);
        assert_eq!(language_code("12_34"), None);
    }

    #[tokio::test]
    async fn test_static_platform_values() {
        let platform = StaticPlatform::new("Mozilla/5.0 (iPhone)")
            .with_language("th")
            .with_fingerprint("ABCD-1234");

        assert_eq!(Platform::language(&platform).as_deref(), Some("th"));
        assert_eq!(Platform::fingerprint(&platform).as_deref(), Some("ABCD-1234"));
        assert_eq!(platform.user_agent().await.unwrap(), "Mozilla/5.0 (iPhone)");
    }

    #[tokio::test]
    async fn test_static_platform_empty_user_agent_fails() {
        let platform = StaticPlatform::default();
        assert!(matches!(
            platform.user_agent().await,
            Err(CollectionError::UserAgent(_))
        ));
    }
}
