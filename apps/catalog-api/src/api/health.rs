//! Readiness endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::state::AppState;

/// Readiness check: pings MongoDB and reports latency. Returns 503 while the
/// database is unreachable so orchestrators hold traffic.
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = database::mongodb::check_health_detailed(&state.mongo_client).await;

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(json!({
            "ready": status.healthy,
            "mongodb": if status.healthy { "connected" } else { "disconnected" },
            "latency_ms": status.response_time_ms,
        })),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
