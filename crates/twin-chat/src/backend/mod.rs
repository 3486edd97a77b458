//! HTTP backend for the Digital Twin assistant API.
//!
//! Implements the `ChatBackend` trait by posting to `{base_url}/chat`,
//! attaching `X-API-Key` when a key is configured. Also exposes the
//! `/health` check and `/conversation/{id}` history lookup.

mod api;
mod client;
mod config;


pub use client::HttpBackend;
pub use config::BackendConfig;
