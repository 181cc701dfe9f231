//! Wallet error types.
//!
//! `NotFound`, `InsufficientFunds` and `InvalidOperation` are business
//! outcomes reported to the client as-is. `Storage` covers every failure of
//! the persistence layer and is never retried here.

use thiserror::Error;
use walletd_shared::WalletId;

/// Errors that can occur during wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// No wallet exists with this id.
    #[error("Wallet not found: {0}")]
    NotFound(WalletId),

    /// Withdrawal exceeds the current balance.
    #[error("Insufficient funds in wallet {wallet_id}: requested {requested}")]
    InsufficientFunds {
        /// The wallet that was debited.
        wallet_id: WalletId,
        /// The amount requested.
        requested: i64,
    },

    /// Unknown operation type or unusable amount.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Persistence layer failure, including connectivity.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WalletError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "wallet_not_found",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::InvalidOperation(_) => "invalid_operation",
            Self::Storage(_) => "internal_error",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InsufficientFunds { .. } | Self::InvalidOperation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Storage(_) => 500,
        }
    }

    /// Returns true when the failure was caused by the request itself.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
