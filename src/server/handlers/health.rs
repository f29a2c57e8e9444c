//! Health handler.

use axum::extract::{Json, State};
use chrono::Utc;

use super::super::types::{AppState, HealthResponse};

/// `GET /api/health` — liveness plus cache statistics.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        cache_stats: state.cache.stats().await,
    })
}
