//! Upstream request construction and execution

use super::error::ProxyError;
use super::models::SearchParams;
use crate::config::UpstreamSettings;
use crate::network::HttpClient;
use tracing::{debug, warn};

/// Proxy executor that forwards search requests to the upstream API
///
/// Holds the credential injected at construction time; nothing here reads
/// process-wide state.
#[derive(Clone)]
pub struct UnsplashProxy {
    client: HttpClient,
    api_url: String,
    access_key: String,
}

impl UnsplashProxy {
    /// Create a new proxy executor
    pub fn new(client: HttpClient, settings: &UpstreamSettings) -> Self {
        Self {
            client,
            api_url: settings.api_url.clone(),
            access_key: settings.access_key.clone(),
        }
    }

    /// Build the upstream request URL for a search
    ///
    /// Parameter values are interpolated verbatim; the upstream API sees
    /// exactly what the caller sent. `orientation` is appended only when
    /// non-empty, never as an empty value.
    fn build_url(&self, params: &SearchParams) -> String {
        let mut url = format!(
            "{}?query={}&per_page={}&client_id={}",
            self.api_url, params.query, params.per_page, self.access_key
        );

        if !params.orientation.is_empty() {
            url.push_str("&orientation=");
            url.push_str(&params.orientation);
        }

        url
    }

    /// Forward one search request upstream and return the JSON body
    ///
    /// Exactly one outbound call, no retries. A transport failure or a
    /// non-2xx upstream status maps to [`ProxyError::Upstream`]; a body
    /// that is not valid JSON maps to [`ProxyError::Server`].
    pub async fn search(&self, params: &SearchParams) -> Result<serde_json::Value, ProxyError> {
        let url = self.build_url(params);
        debug!("forwarding search for '{}' upstream", params.query);

        let response = self
            .client
            .get(&url)
            .await
            .map_err(ProxyError::from_transport)?;

        if !response.is_success() {
            warn!("upstream returned status {}", response.status);
            return Err(ProxyError::Upstream(format!(
                "upstream returned status {}",
                response.status
            )));
        }

        response
            .json()
            .map_err(|e| ProxyError::Server(e.to_string()))
    }
}
