//! HTTP networking module
//!
//! Provides the outbound HTTP client used to reach the upstream API.

mod client;

pub use client::{HttpClient, UpstreamResponse};
