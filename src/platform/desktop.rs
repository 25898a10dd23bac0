//! Default platform for native desktop/server hosts.

use async_trait::async_trait;

use super::{language_code, Platform};
use crate::error::CollectionError;

lazy_static::lazy_static! {
    /// Generated once per process; stands in for a device identifier.
    static ref PROCESS_FINGERPRINT: String = uuid::Uuid::new_v4().to_string().to_uppercase();
}

/// The SDK's HTTP user agent: `connectx-sdk/{version} ({os}; {arch})`.
pub fn sdk_user_agent() -> String {
    format!(
        "connectx-sdk/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Desktop/server platform: OS locale, a process-unique fingerprint, and the
/// SDK user agent (the same string reqwest sends as `User-Agent`).
#[derive(Debug, Clone, Default)]
pub struct DesktopPlatform;

#[async_trait]
impl Platform for DesktopPlatform {
    fn language(&self) -> Option<String> {
        sys_locale::get_locale().and_then(|locale| language_code(&locale))
    }

    fn fingerprint(&self) -> Option<String> {
        Some(PROCESS_FINGERPRINT.clone())
    }

    async fn user_agent(&self) -> Result<String, CollectionError> {
        Ok(sdk_user_agent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_within_process() {
        let a = DesktopPlatform.fingerprint().unwrap();
        let b = DesktopPlatform.fingerprint().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_sdk_user_agent_format() {
        let ua = sdk_user_agent();
        assert!(ua.starts_with("connectx-sdk/"));
        assert!(ua.contains(std::env::consts::OS));
    }

    #[tokio::test]
    async fn test_desktop_user_agent_matches_http_header() {
        assert_eq!(DesktopPlatform.user_agent().await.unwrap(), sdk_user_agent());
    }

    #[test]
    fn test_language_is_a_code_when_present() {
        if let Some(lang) = DesktopPlatform.language() {
            assert!((2..=3).contains(&lang.len()));
            assert_eq!(lang, lang.to_ascii_lowercase());
        }
    }
}
