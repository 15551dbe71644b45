//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status. An empty catalog reports "degraded": the server
/// answers but there is nothing to sign up for.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let activities = state.catalog.len().await;

    let status = if activities > 0 { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        activities,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
