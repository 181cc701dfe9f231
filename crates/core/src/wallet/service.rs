//! Wallet service enforcing balance rules over a ledger store.
//!
//! The service holds no wallet state. Withdrawals are delegated to the
//! store's atomic conditional decrement rather than read-check-write, so
//! the non-negative balance rule holds under concurrent requests and across
//! several service instances sharing one database.

use walletd_shared::WalletId;

use super::error::WalletError;
use super::store::LedgerStore;
use super::types::{Amount, Balance, OperationKind};

/// Stateless business logic over a [`LedgerStore`].
#[derive(Debug, Clone)]
pub struct WalletService<S> {
    store: S,
}

impl<S: LedgerStore> WalletService<S> {
    /// Creates a service over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a wallet with a zero balance.
    pub async fn create_wallet(&self) -> Result<WalletId, WalletError> {
        self.store.create_wallet().await
    }

    /// Returns the balance of an existing wallet.
    pub async fn get_balance(&self, id: WalletId) -> Result<Balance, WalletError> {
        self.store.get_balance(id).await
    }

    /// Classifies a raw operation type and applies it.
    ///
    /// # Errors
    ///
    /// - `InvalidOperation` for an unknown type or a non-positive amount
    /// - `InsufficientFunds` when a withdrawal exceeds the balance
    /// - `NotFound` for an unknown wallet
    /// - `Storage` for persistence failures
    ///
    /// No mutation happens unless `Ok` is returned.
    pub async fn perform_operation(
        &self,
        id: WalletId,
        operation_type: &str,
        amount: i64,
    ) -> Result<(), WalletError> {
        let kind: OperationKind = operation_type.parse()?;
        self.apply(id, kind, amount).await
    }

    /// Applies an already classified operation.
    pub async fn apply(
        &self,
        id: WalletId,
        kind: OperationKind,
        amount: i64,
    ) -> Result<(), WalletError> {
        let amount = Amount::new(amount)?;

        match kind {
            OperationKind::Deposit => self.store.adjust_balance(id, amount.get()).await,
            OperationKind::Withdraw => self.store.withdraw(id, amount).await,
        }
    }
}
