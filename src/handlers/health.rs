// Health check endpoint handler implementation

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::handlers::AppState;

// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    status: &'static str,
    uptime_secs: u64,
}

/// Handler for GET /health - Verifies the page server is running
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthCheckResponse>) {
    let (code, status) = if state.health.check() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        code,
        Json(HealthCheckResponse {
            status,
            uptime_secs: state.health.uptime_secs(),
        }),
    )
}
