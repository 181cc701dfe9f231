//! `SeaORM` entities.

pub mod wallets;
