use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback handler for unknown paths.
///
/// Routes through [`AppError`] so unmatched requests get the same envelope as
/// every other failure.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}
