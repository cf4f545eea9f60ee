//! Request models for the proxy

use serde::Deserialize;

/// Search term used when the caller supplies none
pub const DEFAULT_QUERY: &str = "nature";

/// Page size used when the caller supplies none
pub const DEFAULT_PER_PAGE: &str = "12";

/// Query parameters accepted by the search endpoint
///
/// All three are free-form strings taken verbatim from the inbound query
/// string. `per_page` is not parsed as a number here; the upstream API
/// sees whatever the caller sent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Search term
    pub query: String,
    /// Results per page
    pub per_page: String,
    /// Orientation filter, forwarded only when non-empty
    pub orientation: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            per_page: DEFAULT_PER_PAGE.to_string(),
            orientation: String::new(),
        }
    }
}
