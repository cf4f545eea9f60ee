//! HTTP client for making requests to the upstream API

use crate::config::UpstreamSettings;
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper with proxy-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> reqwest::Result<Self> {
        Self::with_settings(&UpstreamSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &UpstreamSettings) -> reqwest::Result<Self> {
        let timeout = Duration::from_secs_f64(settings.request_timeout);
        let client = Client::builder().timeout(timeout).gzip(true).build()?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Perform a single GET request
    pub async fn get(&self, url: &str) -> reqwest::Result<UpstreamResponse> {
        let response = self
            .client
            .get(url)
            .timeout(self.default_timeout)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Parse response into UpstreamResponse
    async fn parse_response(response: reqwest::Response) -> reqwest::Result<UpstreamResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(UpstreamResponse { status, text, url })
    }
}

/// HTTP response from an upstream request
#[derive(Debug)]
pub struct UpstreamResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl UpstreamResponse {
    /// Parse response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
