//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health))
        .route("/search", get(handlers::search))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::network::HttpClient;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(api_url: &str, access_key: &str) -> Router {
        let mut settings = Settings::default();
        settings.upstream.api_url = api_url.to_string();
        settings.upstream.access_key = access_key.to_string();
        settings.upstream.request_timeout = 5.0;
        let client = HttpClient::with_settings(&settings.upstream).unwrap();
        create_router(AppState::new(settings, client))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = app_for("http://127.0.0.1:1/search/photos", "test-key");
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "status": "healthy",
                "message": "Unsplash Proxy API is running"
            })
        );
    }

    #[tokio::test]
    async fn test_search_passthrough() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("query", "sunset"))
            .and(query_param("per_page", "12"))
            .and(query_param("orientation", "landscape"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
            )
            .mount(&server)
            .await;

        let app = app_for(&format!("{}/search/photos", server.uri()), "test-key");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?query=sunset&orientation=landscape")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "results": [] }));
    }

    #[tokio::test]
    async fn test_search_upstream_failure_is_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let app = app_for(&format!("{}/search/photos", server.uri()), "test-key");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("API request failed:"));
        assert!(!error.contains("test-key"));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = app_for("http://127.0.0.1:1/search/photos", "test-key");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }
}
