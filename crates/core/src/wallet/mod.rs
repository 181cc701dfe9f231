//! Wallet balance management.
//!
//! This module implements the balance-mutation path:
//! - Operation classification and amount validation
//! - The `LedgerStore` contract persisted implementations fulfil
//! - The wallet service enforcing the non-negative balance rule
//! - An in-memory store for tests and local runs

pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WalletError;
pub use memory::MemoryLedgerStore;
pub use service::WalletService;
pub use store::LedgerStore;
pub use types::{Amount, Balance, OperationKind};
pub use walletd_shared::WalletId;
