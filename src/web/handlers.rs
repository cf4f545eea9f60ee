//! HTTP request handlers

use super::state::AppState;
use crate::proxy::{ProxyError, SearchParams};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "message": "Unsplash Proxy API is running"
    }))
}

/// Search handler
///
/// Every failure surfaces as a generic 500, including a query string the
/// framework cannot decode.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let result = match params {
        Ok(Query(params)) => state.proxy.search(&params).await,
        Err(rejection) => Err(ProxyError::Server(rejection.body_text())),
    };

    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            tracing::warn!("search request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload_is_fixed() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["message"], "Unsplash Proxy API is running");
    }
}
