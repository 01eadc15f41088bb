use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses.
///
/// NotFound keeps a specific but id-free message; storage failures collapse
/// into Internal so implementation detail never reaches the client.
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            CatalogError::Validation(msg) => AppError::Validation(msg),
            CatalogError::Database(msg) => AppError::Internal(msg),
            CatalogError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for CatalogError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}
