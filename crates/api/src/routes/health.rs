use axum::{routing::get, Json, Router};
use livecast_core::types::{now, Timestamp};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving requests.
    pub status: &'static str,
    /// Server time at which the check was answered.
    pub timestamp: Timestamp,
}

/// GET /api/health -- liveness only; the document store is not consulted.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: now(),
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
