//! HTTP client layer — `ConnectXHttp`.

pub mod client;

pub use client::ConnectXHttp;
