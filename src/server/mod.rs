//! HTTP server exposing the analysis pipeline.
//!
//! Provides three endpoints:
//! - `POST /api/analyze` - run (or replay from cache) an analysis
//! - `GET /api/health` - liveness and cache statistics
//! - `GET /` - static service metadata
//!
//! All routes sit behind a CORS layer configured from the environment.

mod handlers;
mod types;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use handlers::{analyze_handler, health_handler, index_handler};
pub use types::{AnalyzeRequest, AnalyzeResponse, AppState, ErrorResponse, HealthResponse, ServiceInfo};

/// Builds the application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer from the configured origins.
///
/// `"*"` allows any origin; otherwise the value is a comma-separated origin
/// list and entries that fail header-value parsing are dropped with a
/// warning.
pub fn cors_layer(origins: &str) -> CorsLayer {
    if origins.trim() == "*" {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring unparsable CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Creates and starts the HTTP server.
///
/// Serves until a shutdown signal (Ctrl-C) arrives, then stops accepting
/// connections and drains in-flight requests.
pub async fn start_server(
    port: u16,
    state: AppState,
    cors: CorsLayer,
) -> Result<(), anyhow::Error> {
    let app = build_router(state, cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to port {}: {}", port, e))?;

    log::info!("Server listening on http://0.0.0.0:{}/", port);
    log::info!("  - Analyze: POST http://0.0.0.0:{}/api/analyze", port);
    log::info!("  - Health:  GET  http://0.0.0.0:{}/api/health", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    log::info!("Shutdown signal received, draining in-flight requests");
}
