//! Analysis handler.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::super::types::{AnalyzeRequest, AnalyzeResponse, AppState, ErrorResponse};
use crate::error_handling::AnalysisError;

/// `POST /api/analyze` — analyze one URL.
///
/// Client mistakes (missing body, missing or invalid URL) come back as 400
/// with a message naming the problem. A fatal weight-fetch failure comes
/// back as 500 with a generic message; the cause chain stays in the server
/// log.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Option<Json<AnalyzeRequest>>,
) -> Response {
    let Some(Json(request)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "Request body must be JSON with a \"url\" field");
    };
    let Some(url) = request.url else {
        return error_response(StatusCode::BAD_REQUEST, "Missing \"url\" field");
    };

    match state.analyzer.analyze(&url).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(AnalyzeResponse {
                status: "success".to_string(),
                data: outcome.result,
                cached: outcome.cached,
            }),
        )
            .into_response(),
        Err(e @ AnalysisError::InvalidUrl(_)) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(AnalysisError::WeightUnavailable { url, source }) => {
            log::error!("Weight fetch failed for {url}: {source}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze the page",
            )
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
