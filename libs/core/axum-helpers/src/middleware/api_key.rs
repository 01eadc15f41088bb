//! API-key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use core_config::auth::AuthConfig;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header carrying the shared-secret API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// State for [`require_api_key`], built once from [`AuthConfig`] at startup.
#[derive(Clone)]
pub struct ApiKeyAuth {
    key: Arc<str>,
}

impl ApiKeyAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: Arc::from(config.api_key.as_str()),
        }
    }

    /// Constant-time comparison; length mismatches compare unequal.
    fn verify(&self, presented: &str) -> bool {
        presented.as_bytes().ct_eq(self.key.as_bytes()).into()
    }
}

/// Rejects requests without a matching API key before any handler runs.
///
/// Apply with `middleware::from_fn_with_state` to every route that requires
/// authentication, reads included.
pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match presented {
        Some(key) if auth.verify(key) => Ok(next.run(request).await),
        _ => Err(AppError::Unauthorized(
            "Invalid or missing API key".to_string(),
        )),
    }
}
