use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body returned by the write endpoints on success.
#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

/// Body returned by every endpoint on failure.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

pub fn acknowledged(message: impl Into<String>) -> impl IntoResponse {
    let body = Acknowledgement {
        success: true,
        message: message.into(),
    };
    (StatusCode::OK, Json(body))
}

pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    let body = ApiErrorResponse {
        error: message.into(),
    };

    (status, Json(body)).into_response()
}
