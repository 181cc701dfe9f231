//! Core business logic for walletd.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `wallet` - Balance rules, the ledger store contract, and the wallet service

pub mod wallet;
