//! Wallet routes.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use walletd_core::wallet::Balance;
use walletd_shared::WalletId;

use crate::{AppState, error::ApiError, middleware::admission_middleware};

/// Creates the wallet routes. Only operations pass through admission control.
pub fn routes(state: AppState) -> Router<AppState> {
    let admitted = Router::new()
        .route("/wallets/operation", post(perform_operation))
        .route_layer(middleware::from_fn_with_state(state, admission_middleware));

    Router::new()
        .route("/wallet", post(create_wallet))
        .route("/wallets/{wallet_id}", get(get_balance))
        .merge(admitted)
}

/// Response for a created wallet.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletResponse {
    /// The new wallet's ID.
    pub wallet_id: WalletId,
}

/// Response for a balance lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Current balance in minor units.
    pub balance: Balance,
}

/// Request body for a deposit or withdrawal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    /// Target wallet.
    pub wallet_id: WalletId,
    /// `DEPOSIT` or `WITHDRAW`.
    pub operation_type: String,
    /// Amount in minor units, must be positive.
    pub amount: i64,
}

/// Acknowledgement for an applied operation.
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    /// Always `"success"`.
    pub status: &'static str,
}

fn parse_wallet_id(raw: &str) -> Result<WalletId, ApiError> {
    let id: WalletId = raw
        .parse()
        .map_err(|_| ApiError::InvalidWalletId(raw.to_string()))?;
    if id.is_nil() {
        return Err(ApiError::InvalidWalletId(raw.to_string()));
    }
    Ok(id)
}

/// POST `/wallet` - Create a wallet with a zero balance.
async fn create_wallet(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let wallet_id = state.wallets.create_wallet().await?;
    info!(wallet_id = %wallet_id, "Wallet created");

    Ok((StatusCode::CREATED, Json(CreateWalletResponse { wallet_id })))
}

/// GET `/wallets/{wallet_id}` - Read a wallet's balance.
async fn get_balance(
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let wallet_id = parse_wallet_id(&wallet_id)?;
    let balance = state.wallets.get_balance(wallet_id).await?;

    Ok(Json(BalanceResponse { balance }))
}

/// POST `/wallets/operation` - Deposit to or withdraw from a wallet.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
async fn perform_operation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OperationResponse>, ApiError> {
    let request: OperationRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    if request.wallet_id.is_nil() {
        return Err(ApiError::InvalidWalletId(request.wallet_id.to_string()));
    }

    if let Err(e) = state
        .wallets
        .perform_operation(request.wallet_id, &request.operation_type, request.amount)
        .await
    {
        if e.is_client_error() {
            debug!(
                wallet_id = %request.wallet_id,
                operation = %request.operation_type,
                amount = request.amount,
                error = %e,
                "Wallet operation rejected"
            );
        }
        return Err(e.into());
    }

    info!(
        wallet_id = %request.wallet_id,
        operation = %request.operation_type,
        amount = request.amount,
        "Wallet operation applied"
    );
    Ok(Json(OperationResponse { status: "success" }))
}

#[cfg(test)]
#[path = "wallets_tests.rs"]
mod tests;
