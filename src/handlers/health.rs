use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::estimate::AppState;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "customs-estimator",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
/// Ready only once the first rate snapshot has been loaded; estimates
/// decline until then.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.rates.is_ready() {
        (StatusCode::OK, Json(json!({
            "status": "ready",
            "service": "customs-estimator",
        })))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({
            "status": "waiting_for_rates",
            "service": "customs-estimator",
        })))
    }
}
