//! API route composition

pub mod health;
pub mod products;

use axum::{middleware, routing::get, Router};
use axum_helpers::middleware::{require_api_key, ApiKeyAuth};

use crate::state::AppState;

/// All routes under the API prefix. Every route here, reads included, sits
/// behind the API-key middleware.
pub fn routes(state: &AppState) -> Router {
    let auth = ApiKeyAuth::new(&state.config.auth);

    Router::new()
        .route("/", get(welcome))
        .nest("/products", products::router(state))
        .layer(middleware::from_fn_with_state(auth, require_api_key))
}

async fn welcome() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}

/// Readiness endpoint, outside the auth boundary
pub fn ready_router(state: AppState) -> Router {
    health::router(state)
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await
}
