//! # Connect-X SDK
//!
//! Rust client for Connect-X web tracking: collects client metadata, fetches a
//! session cookie, and submits behaviour, identify and open-ticket events.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, endpoint constants, JSON helpers
//! 2. **Platform** — `Platform` capability: locale, fingerprint, user agent
//! 3. **Session + HTTP** — token/session clock and `ConnectXHttp`
//! 4. **Collection** — cookie provider and the `cx_*` client-data collector
//! 5. **High-Level Client** — `ConnectXClient` with per-domain sub-clients
//!
//! Every tracking call runs the same sequence: user agent → cookie → merge →
//! POST. Nothing is posted if collection fails, and nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use connectx_sdk::prelude::*;
//!
//! let client = ConnectXClient::builder().build()?;
//! client.initialize("abc123").await;
//!
//! // Structured errors
//! client.events().track(TrackEvent::behavior("click")).await?;
//!
//! // Success flag only
//! let ok = client.open_ticket(JsonObject::new()).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants and tracking endpoints.
pub mod network;

/// JSON object helpers.
pub mod shared;

// ── Layer 2: Platform ────────────────────────────────────────────────────────

/// Platform capability trait and implementations.
pub mod platform;

// ── Layer 3: Session + HTTP ──────────────────────────────────────────────────

/// Token and session clock.
pub mod config;

/// Low-level HTTP client.
pub mod http;

// ── Layer 4: Collection ──────────────────────────────────────────────────────

/// Session cookie provider.
pub mod cookie;

/// Client data bag and collector.
pub mod client_data;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// Tracking domains: payload shaping + sub-clients.
pub mod domain;

/// `ConnectXClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::client::{
        ConnectXClient, ConnectXClientBuilder, EventsClient, FormsClient, TicketsClient,
    };
    pub use crate::client_data::ClientData;
    pub use crate::config::SdkConfig;
    pub use crate::domain::event::TrackEvent;
    pub use crate::domain::form::IdentifyRequest;
    pub use crate::error::{ErrorKind, SdkError};
    pub use crate::network::{Endpoint, DEFAULT_API_URL, DEFAULT_COOKIE_URL};
    pub use crate::platform::{DesktopPlatform, Platform, StaticPlatform};
    pub use crate::shared::JsonObject;
}
