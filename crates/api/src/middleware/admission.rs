//! Admission middleware for balance-mutating routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{AppState, error::ApiError};

/// Holds an admission slot for the whole lifetime of the inner handler.
///
/// The request waits here until a slot is free. The permit is dropped when
/// this future completes or is cancelled, whatever the handler returned.
pub async fn admission_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let permit = match state.gate.admit().await {
        Ok(permit) => permit,
        Err(e) => return ApiError::from(e).into_response(),
    };
    debug!(in_flight = state.gate.in_flight(), "Request admitted");

    let response = next.run(request).await;
    drop(permit);
    response
}
