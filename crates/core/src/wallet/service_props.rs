//! Property-based tests for WalletService.
//!
//! - Balance never goes negative under any operation sequence
//! - The service agrees with a simple reference model
//! - Rejected operations never mutate the balance

use std::sync::Arc;

use proptest::prelude::*;

use super::error::WalletError;
use super::memory::MemoryLedgerStore;
use super::service::WalletService;

/// Strategy to generate raw operation types, including garbage ones.
fn operation_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        4 => Just("DEPOSIT"),
        4 => Just("WITHDRAW"),
        1 => Just("FOO"),
        1 => Just("withdraw"),
    ]
}

/// Strategy to generate amounts, including invalid non-positive ones.
fn raw_amount() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => 1i64..500,
        1 => Just(0i64),
        1 => -100i64..0,
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
}

proptest! {
    /// Property: balance >= 0 after every operation, and it matches the model.
    #[test]
    fn prop_balance_never_negative(
        ops in prop::collection::vec((operation_type(), raw_amount()), 1..60)
    ) {
        let rt = runtime();
        let service = WalletService::new(Arc::new(MemoryLedgerStore::new()));
        let id = rt.block_on(service.create_wallet()).unwrap();
        let mut model: i64 = 0;

        for (kind, amount) in ops {
            let result = rt.block_on(service.perform_operation(id, kind, amount));

            match (kind, amount > 0) {
                ("DEPOSIT", true) => {
                    prop_assert!(result.is_ok());
                    model += amount;
                }
                ("WITHDRAW", true) if amount <= model => {
                    prop_assert!(result.is_ok());
                    model -= amount;
                }
                ("WITHDRAW", true) => {
                    let is_insufficient = matches!(result, Err(WalletError::InsufficientFunds { .. }));
                    prop_assert!(is_insufficient);
                }
                _ => {
                    let is_invalid = matches!(result, Err(WalletError::InvalidOperation(_)));
                    prop_assert!(is_invalid);
                }
            }

            let balance = rt.block_on(service.get_balance(id)).unwrap();
            prop_assert!(balance >= 0);
            prop_assert_eq!(balance, model);
        }
    }

    /// Property: deposit(a) followed by withdraw(a) is the identity.
    #[test]
    fn prop_deposit_withdraw_round_trip(start in 0i64..10_000, amount in 1i64..10_000) {
        let rt = runtime();
        let service = WalletService::new(Arc::new(MemoryLedgerStore::new()));
        let id = rt.block_on(service.create_wallet()).unwrap();
        if start > 0 {
            rt.block_on(service.perform_operation(id, "DEPOSIT", start)).unwrap();
        }

        rt.block_on(service.perform_operation(id, "DEPOSIT", amount)).unwrap();
        rt.block_on(service.perform_operation(id, "WITHDRAW", amount)).unwrap();

        prop_assert_eq!(rt.block_on(service.get_balance(id)).unwrap(), start);
    }

    /// Property: an overdraft attempt leaves the balance untouched.
    #[test]
    fn prop_overdraft_is_rejected_without_mutation(start in 0i64..10_000, excess in 1i64..10_000) {
        let rt = runtime();
        let service = WalletService::new(Arc::new(MemoryLedgerStore::new()));
        let id = rt.block_on(service.create_wallet()).unwrap();
        if start > 0 {
            rt.block_on(service.perform_operation(id, "DEPOSIT", start)).unwrap();
        }

        let result = rt.block_on(service.perform_operation(id, "WITHDRAW", start + excess));
        let is_insufficient = matches!(result, Err(WalletError::InsufficientFunds { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(rt.block_on(service.get_balance(id)).unwrap(), start);
    }
}
