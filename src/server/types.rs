//! HTTP server data structures.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisResult, Analyzer};
use crate::cache::{CacheStats, ResultCache};

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The analysis pipeline.
    pub analyzer: Arc<Analyzer>,
    /// The result cache, exposed for health reporting.
    pub cache: Arc<ResultCache>,
}

/// Request body for `POST /api/analyze`.
///
/// `url` is optional at the deserialization level so its absence can be
/// reported as a structured 400 instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The URL to analyze.
    pub url: Option<String>,
}

/// Success envelope for `POST /api/analyze`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Always `"success"`.
    pub status: String,
    /// The analysis result.
    pub data: AnalysisResult,
    /// True when the result was served from the cache.
    pub cached: bool,
}

/// Error envelope shared by all endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// Human-readable description; never a stack trace.
    pub message: String,
}

impl ErrorResponse {
    /// Builds the envelope around a message.
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Response body for `GET /api/health`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` when the endpoint answers at all.
    pub status: String,
    /// Server time of the health check.
    pub timestamp: DateTime<Utc>,
    /// Result-cache size and hit/miss counters.
    pub cache_stats: CacheStats,
}

/// Response body for `GET /`: static service metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Package name.
    pub name: String,
    /// Package version.
    pub version: String,
    /// The routes this service exposes.
    pub endpoints: Vec<String>,
}
