//! Wallet repository: the relational ledger store.
//!
//! Every mutation is a single auto-committed statement. Withdrawals use a
//! conditional `UPDATE ... WHERE balance >= amount` and inspect the number of
//! affected rows, so the balance check and the decrement cannot interleave
//! with another writer.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    sea_query::Expr,
};
use tracing::debug;

use walletd_core::wallet::{Amount, Balance, LedgerStore, WalletError};
use walletd_shared::WalletId;

use crate::entities::wallets;

/// Converts a database error into the wallet storage error.
fn storage(err: DbErr) -> WalletError {
    WalletError::Storage(err.to_string())
}

/// Wallet repository backed by the `wallets` table.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a wallet row by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: WalletId) -> Result<Option<wallets::Model>, DbErr> {
        wallets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
    }

    /// Resolves why an update touched no row.
    async fn missing_or(&self, id: WalletId, err: WalletError) -> WalletError {
        match self.find_by_id(id).await {
            Ok(Some(_)) => err,
            Ok(None) => WalletError::NotFound(id),
            Err(e) => storage(e),
        }
    }
}

#[async_trait]
impl LedgerStore for WalletRepository {
    async fn create_wallet(&self) -> Result<WalletId, WalletError> {
        let id = WalletId::new();

        let wallet = wallets::ActiveModel {
            id: Set(id.into_inner()),
            balance: Set(0),
        };

        wallets::Entity::insert(wallet)
            .exec_without_returning(&self.db)
            .await
            .map_err(storage)?;

        debug!(wallet_id = %id, "Wallet created");
        Ok(id)
    }

    async fn get_balance(&self, id: WalletId) -> Result<Balance, WalletError> {
        self.find_by_id(id)
            .await
            .map_err(storage)?
            .map(|w| w.balance)
            .ok_or(WalletError::NotFound(id))
    }

    async fn adjust_balance(&self, id: WalletId, delta: i64) -> Result<(), WalletError> {
        let mut update = wallets::Entity::update_many()
            .col_expr(
                wallets::Column::Balance,
                Expr::col(wallets::Column::Balance).add(delta),
            )
            .filter(wallets::Column::Id.eq(id.into_inner()));

        // SQLite widens an overflowing integer to REAL instead of failing.
        if delta > 0 {
            update = update.filter(wallets::Column::Balance.lte(i64::MAX - delta));
        }

        let result = update.exec(&self.db).await.map_err(storage)?;

        if result.rows_affected == 0 {
            return Err(self
                .missing_or(
                    id,
                    WalletError::Storage(format!("balance overflow adding {delta}")),
                )
                .await);
        }

        Ok(())
    }

    async fn withdraw(&self, id: WalletId, amount: Amount) -> Result<(), WalletError> {
        let result = wallets::Entity::update_many()
            .col_expr(
                wallets::Column::Balance,
                Expr::col(wallets::Column::Balance).sub(amount.get()),
            )
            .filter(wallets::Column::Id.eq(id.into_inner()))
            .filter(wallets::Column::Balance.gte(amount.get()))
            .exec(&self.db)
            .await
            .map_err(storage)?;

        if result.rows_affected == 0 {
            debug!(wallet_id = %id, amount = amount.get(), "Conditional withdraw matched no row");
            return Err(self
                .missing_or(
                    id,
                    WalletError::InsufficientFunds {
                        wallet_id: id,
                        requested: amount.get(),
                    },
                )
                .await);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "wallet_tests.rs"]
mod tests;
