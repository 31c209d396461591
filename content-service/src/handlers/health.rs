use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Welcome to the AI Service!"
    }))
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "content-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: the model provider must answer its health check.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "error": e.to_string()
                })),
            )
        }
    }
}

pub async fn metrics() -> impl IntoResponse {
    crate::services::metrics::get_metrics()
}
