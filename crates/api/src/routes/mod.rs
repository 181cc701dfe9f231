//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod wallets;

/// Plain-text banner served at `/`.
pub async fn welcome() -> &'static str {
    "Welcome to walletd API"
}

/// Creates the API router; wallet operations are wrapped in admission control.
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(wallets::routes(state))
}
