//! In-memory ledger store.
//!
//! Mirrors the relational store's behavior, including the
//! `balance >= 0` check constraint on plain adjustments.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use walletd_shared::WalletId;

use super::error::WalletError;
use super::store::LedgerStore;
use super::types::{Amount, Balance};

/// Ledger store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    wallets: Mutex<HashMap<WalletId, Balance>>,
}

impl MemoryLedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of wallets held. Still answers after a writer panicked.
    pub fn len(&self) -> usize {
        self.wallets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no wallet has been created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<WalletId, Balance>>, WalletError> {
        self.wallets
            .lock()
            .map_err(|_| WalletError::Storage("wallet map lock poisoned".into()))
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn create_wallet(&self) -> Result<WalletId, WalletError> {
        let id = WalletId::new();
        self.lock()?.insert(id, 0);
        Ok(id)
    }

    async fn get_balance(&self, id: WalletId) -> Result<Balance, WalletError> {
        self.lock()?
            .get(&id)
            .copied()
            .ok_or(WalletError::NotFound(id))
    }

    async fn adjust_balance(&self, id: WalletId, delta: i64) -> Result<(), WalletError> {
        let mut wallets = self.lock()?;
        let balance = wallets.get_mut(&id).ok_or(WalletError::NotFound(id))?;

        let updated = balance
            .checked_add(delta)
            .ok_or_else(|| WalletError::Storage(format!("balance overflow on wallet {id}")))?;
        if updated < 0 {
            return Err(WalletError::Storage(format!(
                "balance check violated on wallet {id}"
            )));
        }

        *balance = updated;
        Ok(())
    }

    async fn withdraw(&self, id: WalletId, amount: Amount) -> Result<(), WalletError> {
        let mut wallets = self.lock()?;
        let balance = wallets.get_mut(&id).ok_or(WalletError::NotFound(id))?;

        if *balance < amount.get() {
            return Err(WalletError::InsufficientFunds {
                wallet_id: id,
                requested: amount.get(),
            });
        }

        *balance -= amount.get();
        Ok(())
    }
}
