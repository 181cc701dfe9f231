//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - The relational `LedgerStore` implementation
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::WalletRepository;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use walletd_shared::{AppError, AppResult, DatabaseConfig};

use crate::migration::Migrator;

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns `AppError::Database` if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| AppError::Database(format!("connect failed: {e}")))
}

/// Applies every pending migration.
///
/// # Errors
///
/// Returns `AppError::Database` if a migration fails.
pub async fn migrate(db: &DatabaseConnection) -> AppResult<()> {
    Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(format!("migration failed: {e}")))
}
