use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;
use crate::utils::response::error as error_response;

/// The single failure kind of the API. Whatever went wrong, the client gets
/// a 500 with the underlying message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request could not be decoded.
    #[error("{0}")]
    Rejected(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Store(StoreError::Database(_)) => "DATABASE_ERROR",
            AppError::Store(StoreError::Constraint(_)) => "CONSTRAINT_ERROR",
            AppError::Store(StoreError::Unavailable(_)) => "STORE_UNAVAILABLE",
            AppError::Rejected(_) => "REQUEST_REJECTED",
        }
    }

    fn log(&self) {
        match self {
            AppError::Store(StoreError::Database(e)) => {
                error!(error = ?e, code = self.code(), "Database error");
            }
            AppError::Store(StoreError::Constraint(msg))
            | AppError::Store(StoreError::Unavailable(msg))
            | AppError::Rejected(msg) => {
                error!(code = self.code(), message = %msg, "Operation failed");
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Store(StoreError::Database(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        self.log();

        error_response(self.to_string(), status)
    }
}
