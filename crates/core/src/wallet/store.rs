//! Ledger store contract.
//!
//! The store exclusively owns persisted wallet balances. It knows nothing
//! about business rules except for `withdraw`, which must perform its
//! balance check and decrement as one atomic step so that concurrent
//! withdrawals cannot jointly overdraw a wallet.

use std::sync::Arc;

use async_trait::async_trait;
use walletd_shared::WalletId;

use super::error::WalletError;
use super::types::{Amount, Balance};

/// Durable wallet id to balance mapping.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Persists a new wallet with a zero balance and returns its id.
    async fn create_wallet(&self) -> Result<WalletId, WalletError>;

    /// Returns the current balance, or `NotFound` for an unknown id.
    async fn get_balance(&self, id: WalletId) -> Result<Balance, WalletError>;

    /// Applies a relative change to the balance without any business check.
    async fn adjust_balance(&self, id: WalletId, delta: i64) -> Result<(), WalletError>;

    /// Decrements the balance by `amount` only if the balance covers it.
    ///
    /// Fails with `InsufficientFunds` (no mutation) when it does not, and
    /// with `NotFound` when the wallet does not exist.
    async fn withdraw(&self, id: WalletId, amount: Amount) -> Result<(), WalletError>;
}

#[async_trait]
impl<T: LedgerStore + ?Sized> LedgerStore for Arc<T> {
    async fn create_wallet(&self) -> Result<WalletId, WalletError> {
        (**self).create_wallet().await
    }

    async fn get_balance(&self, id: WalletId) -> Result<Balance, WalletError> {
        (**self).get_balance(id).await
    }

    async fn adjust_balance(&self, id: WalletId, delta: i64) -> Result<(), WalletError> {
        (**self).adjust_balance(id, delta).await
    }

    async fn withdraw(&self, id: WalletId, amount: Amount) -> Result<(), WalletError> {
        (**self).withdraw(id, amount).await
    }
}
