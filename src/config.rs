//! Session configuration — bearer token and session clock.
//!
//! A [`SessionState`] is shared by every clone of a client. Readers never
//! block each other. A call already in flight when `initialize` runs may pair
//! the old token with the new session start; that race is accepted.

use async_lock::RwLock;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Token plus the instant the current session started.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    pub token: String,
    pub session_start: Instant,
    /// Wall-clock time of the last `initialize` (or client construction).
    pub initialized_at: DateTime<Utc>,
}

impl SdkConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            session_start: Instant::now(),
            initialized_at: Utc::now(),
        }
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.session_start.elapsed()
    }

    /// Whole seconds since the session started, rounded down.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// Shared handle to the client's [`SdkConfig`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<SdkConfig>>,
}

impl SessionState {
    pub fn new(config: SdkConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Replace the token and restart the session clock.
    pub async fn initialize(&self, token: impl Into<String>) {
        *self.inner.write().await = SdkConfig::new(token);
        tracing::info!("Tracking session initialized");
    }

    pub async fn token(&self) -> String {
        self.inner.read().await.token.clone()
    }

    pub async fn elapsed_secs(&self) -> u64 {
        self.inner.read().await.elapsed_secs()
    }

    pub async fn snapshot(&self) -> SdkConfig {
        self.inner.read().await.clone()
    }
}
