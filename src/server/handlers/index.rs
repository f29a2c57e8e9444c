//! Service metadata handler.

use axum::extract::Json;

use super::super::types::ServiceInfo;

/// `GET /` — static service metadata.
pub async fn index_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "POST /api/analyze".to_string(),
            "GET /api/health".to_string(),
            "GET /".to_string(),
        ],
    })
}
