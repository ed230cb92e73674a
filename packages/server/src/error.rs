use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::storage::StorageError;
use serde::Serialize;

use crate::store::StoreError;

/// Structured error response returned by endpoints on non-auth failures.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `NOT_FOUND`,
    /// `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Title must not be blank")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    TokenMissing,
    TokenInvalid,
    InvalidCredentials,
    NotFound(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, Option<ErrorBody>) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Some(ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                }),
            ),
            AppError::TokenMissing => {
                tracing::debug!("Rejected request without admin token");
                (StatusCode::UNAUTHORIZED, None)
            }
            AppError::TokenInvalid => {
                tracing::debug!("Rejected request with stale or unknown admin token");
                (StatusCode::UNAUTHORIZED, None)
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, None),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Some(ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                }),
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Some(ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    }),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status_and_body() {
            (status, Some(body)) => (status, Json(body)).into_response(),
            // Auth failures carry no body.
            (status, None) => status.into_response(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
            StoreError::Storage(e) => AppError::from(e),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => AppError::NotFound("No photo has been uploaded".into()),
            StorageError::SizeLimitExceeded { .. } => AppError::Validation(err.to_string()),
            StorageError::Io(e) => AppError::Internal(format!("Photo storage failed: {e}")),
        }
    }
}
