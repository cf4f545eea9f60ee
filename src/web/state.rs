//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::proxy::UnsplashProxy;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Proxy executor
    pub proxy: Arc<UnsplashProxy>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let proxy = Arc::new(UnsplashProxy::new(client, &settings.upstream));

        Self {
            settings: Arc::new(settings),
            proxy,
        }
    }
}
