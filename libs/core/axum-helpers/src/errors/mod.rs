pub mod handlers;
pub mod responses;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every failure is rendered as this envelope:
///
/// ```json
/// {
///   "error": {
///     "message": "Product not found",
///     "type": "NotFound",
///     "status": 404
///   }
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Inner body of [`ErrorResponse`].
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
    /// Stable failure kind for programmatic handling
    #[serde(rename = "type")]
    pub kind: String,
    /// Numeric status, always matching the HTTP status of the response
    pub status: u16,
}

/// Application error type that converts into HTTP responses.
///
/// The [`IntoResponse`] implementation is the single place status codes are
/// decided and the single place failures are logged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable `type` string carried in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Validation(_) => "Validation",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Each failure is logged exactly once, here, before the response is
        // built. Internal causes go to the log only; the client gets a
        // generic message.
        let message = match &self {
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                msg.clone()
            }
            AppError::Validation(msg) => {
                tracing::info!("Validation failed: {}", msg);
                msg.clone()
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg.clone()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorBody {
                message,
                kind: self.kind().to_string(),
                status: status.as_u16(),
            },
        });

        (status, body).into_response()
    }
}
