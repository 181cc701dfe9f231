//! Liveness endpoint exposing admission gate occupancy.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"healthy"` when the process answers.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Admission slots configured for wallet operations.
    pub gate_capacity: usize,
    /// Wallet operations currently holding a slot.
    pub in_flight: usize,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        gate_capacity: state.gate.capacity(),
        in_flight: state.gate.in_flight(),
    })
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
