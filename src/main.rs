//! Unsplash Proxy: a small HTTP proxy for the Unsplash photo search API
//!
//! This is the main entry point for the application.

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use unsplash_proxy::{
    config::Settings,
    network::HttpClient,
    web::{create_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting Unsplash Proxy v{}", unsplash_proxy::VERSION);

    // Load configuration
    let settings = load_settings()?;
    if settings.upstream.access_key.is_empty() {
        warn!("no access key configured; upstream calls will fail authentication");
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.upstream)?;
    info!("HTTP client initialized");

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings, client);
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("UNSPLASH_PROXY_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Check for settings file in various locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("unsplash-proxy/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
