//! Wallets migration.
//!
//! Creates the single balance table. The statements stay within the SQL
//! subset shared by PostgreSQL and SQLite.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(WALLETS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS wallets;").await?;
        Ok(())
    }
}

const WALLETS_SQL: &str = r"
-- One row per wallet; balance in minor currency units
CREATE TABLE IF NOT EXISTS wallets (
    id UUID PRIMARY KEY,
    balance BIGINT NOT NULL DEFAULT 0,
    CONSTRAINT chk_wallets_balance_non_negative CHECK (balance >= 0)
);
";
