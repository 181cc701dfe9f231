//! Mapping of wallet and gateway outcomes to HTTP responses.
//!
//! Every error body has the shape `{"error": <code>, "message": <text>}`.
//! Storage failures are logged here and reported with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};
use walletd_core::wallet::WalletError;

use crate::gateway::GatewayError;

/// Errors returned by wallet handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Outcome reported by the wallet service.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Path or body wallet id is not a usable UUID.
    #[error("Invalid wallet ID: {0}")]
    InvalidWalletId(String),

    /// Request body could not be read as the expected JSON.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// The request could not be admitted.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Wallet(e) => StatusCode::from_u16(e.http_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::InvalidWalletId(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Gateway(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Returns the error code placed in the response body.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Wallet(e) => e.error_code(),
            Self::InvalidWalletId(_) => "invalid_wallet_id",
            Self::MalformedBody(_) => "invalid_request_body",
            Self::Gateway(GatewayError::Timeout(_)) => "gateway_busy",
            Self::Gateway(GatewayError::Closed) => "gateway_closed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Wallet(WalletError::Storage(e)) => {
                error!(error = %e, "Wallet storage failure");
                "An error occurred".to_string()
            }
            Self::Gateway(e) => {
                warn!(error = %e, "Request not admitted");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (
            self.status(),
            Json(json!({
                "error": self.code(),
                "message": message,
            })),
        )
            .into_response()
    }
}
