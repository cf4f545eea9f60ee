//! Error types for the proxy request path

use thiserror::Error;

/// Failure of a single proxied request
///
/// Every failure maps to HTTP 500; the variant only selects the message
/// prefix seen by the caller.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound call failed at the transport or HTTP level
    #[error("API request failed: {0}")]
    Upstream(String),
    /// Anything else that went wrong while handling the request
    #[error("Server error: {0}")]
    Server(String),
}

impl ProxyError {
    /// Classify a transport-level failure from the outbound call.
    ///
    /// The URL is stripped from the error text before it is surfaced: the
    /// query string carries the `client_id` credential.
    pub fn from_transport(err: reqwest::Error) -> Self {
        Self::Upstream(err.without_url().to_string())
    }
}
