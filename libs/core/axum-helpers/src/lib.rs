//! # Axum Helpers
//!
//! Utilities and middleware shared by the HTTP surface:
//!
//! - **[`errors`]**: the error normalizer — every failure, regardless of
//!   origin, renders as the same structured envelope
//! - **[`extractors`]**: JSON body extraction that reports malformed bodies
//!   through the normalizer instead of axum's default rejection
//! - **[`middleware`]**: API-key authentication and security headers
//! - **[`server`]**: router composition (docs, tracing, CORS, fallback) and
//!   server startup with graceful shutdown

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

pub use errors::{AppError, AppResult, ErrorBody, ErrorResponse};
pub use extractors::JsonBody;
pub use middleware::{require_api_key, ApiKeyAuth, API_KEY_HEADER};
pub use server::{create_app, create_router, health_router};
