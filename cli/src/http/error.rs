use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failures that happen before or around the dispatcher, not inside a response.
#[derive(Debug)]
pub enum HttpServerError {
    InvalidRequest(String),
    Internal,
}

impl HttpServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            HttpServerError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            HttpServerError::InvalidRequest(detail) => format!("invalid request body: {detail}"),
            HttpServerError::Internal => "internal server error during analysis".to_string(),
        }
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
