//! HTTP route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use snipcheck_core::api::{AnalysisRequest, AnalysisResponse};

use crate::http::{error::HttpServerError, AppState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub languages: Vec<String>,
    pub timestamp: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// POST /api/v1/analyze
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Response, HttpServerError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "invalid request body");
        HttpServerError::InvalidRequest(rejection.body_text())
    })?;

    tracing::info!(
        language = req.language.as_deref().unwrap_or(""),
        snippet_len = req.code_snippet.len(),
        project_url = req.project_url.as_deref().unwrap_or(""),
        "received analysis request"
    );

    let response = state.dispatcher.analyze(&req).await.map_err(|e| {
        tracing::error!(error = %e, "dispatcher failed to produce a response");
        HttpServerError::Internal
    })?;

    Ok((status_for(&response), Json(response)).into_response())
}

/// Maps a finished response to an HTTP status by inspecting its `error` text.
pub fn status_for(response: &AnalysisResponse) -> StatusCode {
    let error = response.error.as_str();
    if error.is_empty() {
        StatusCode::OK
    } else if error.contains("not supported") || error.contains("detection failed") {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        languages: state
            .dispatcher
            .registry()
            .languages()
            .into_iter()
            .map(String::from)
            .collect(),
        timestamp: Local::now().to_rfc3339(),
    })
}
