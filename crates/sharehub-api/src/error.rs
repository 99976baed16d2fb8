//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sharehub_core::error::{AppError, ErrorKind, FieldError};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Offending fields, for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result alias for handlers and middleware.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self(AppError::from(errors))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match err.kind {
            ErrorKind::Internal | ErrorKind::Configuration => {
                tracing::error!(error = %err, source = ?err.source, "Internal server error");
                ApiErrorResponse {
                    error: ErrorKind::Internal.code().to_string(),
                    message: "An internal error occurred".to_string(),
                    details: None,
                }
            }
            kind => ApiErrorResponse {
                error: kind.code().to_string(),
                message: err.message,
                details: (!err.details.is_empty()).then_some(err.details),
            },
        };

        (status, Json(body)).into_response()
    }
}
