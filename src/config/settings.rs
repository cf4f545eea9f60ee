//! Settings structures for the proxy configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            upstream: UpstreamSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("UNSPLASH_ACCESS_KEY") {
            self.upstream.access_key = val;
        }
        if let Ok(val) = std::env::var("UNSPLASH_PROXY_API_URL") {
            self.upstream.api_url = val;
        }
        if let Ok(val) = std::env::var("UNSPLASH_PROXY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("UNSPLASH_PROXY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Upstream API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Base URL of the photo search endpoint
    pub api_url: String,
    /// Access key sent as the `client_id` parameter
    pub access_key: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.unsplash.com/search/photos".to_string(),
            access_key: String::new(),
            request_timeout: crate::UPSTREAM_TIMEOUT as f64,
        }
    }
}
