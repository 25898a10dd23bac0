//! Tracking domains organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — payload types and the shaping function that merges client data
//! - `client.rs` — sub-client that collects client data and submits the event

pub mod event;
pub mod form;
pub mod ticket;
