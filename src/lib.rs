//! Unsplash Proxy: a small HTTP proxy for the Unsplash photo search API
//!
//! Accepts a search request, injects the server-side API credential, and
//! relays the upstream JSON response back to the caller.

pub mod config;
pub mod network;
pub mod proxy;
pub mod web;

pub use config::Settings;
pub use proxy::{ProxyError, SearchParams, UnsplashProxy};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timeout for upstream requests in seconds
pub const UPSTREAM_TIMEOUT: u64 = 10;
