//! Property-based tests for ledger balance and history invariants.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::store::LedgerStore;
use super::transaction::{TransactionKind, TransactionOutcome};
use crate::storage::KvStore;

#[derive(Debug, Clone)]
enum Op {
    Credit(Decimal),
    Debit(Decimal),
}

/// Strategy to generate a positive amount between 0.01 and 10,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        positive_amount().prop_map(Op::Credit),
        positive_amount().prop_map(Op::Debit),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The balance never goes negative, and a rejected debit changes nothing.
    #[test]
    fn prop_balance_never_negative(ops in prop::collection::vec(op_strategy(), 1..40)) {
        runtime().block_on(async {
            let store = Arc::new(KvStore::memory().unwrap());
            let mut ledger = LedgerStore::load(store, 10).await;
            let mut expected = Decimal::ZERO;

            for op in ops {
                match op {
                    Op::Credit(amount) => {
                        expected += amount;
                        prop_assert_eq!(ledger.credit(amount).await, expected);
                    }
                    Op::Debit(amount) => {
                        let before = ledger.current_balance();
                        match ledger.debit(amount).await {
                            Ok(balance) => {
                                expected -= amount;
                                prop_assert_eq!(balance, expected);
                            }
                            Err(LedgerError::InsufficientFunds { requested, available }) => {
                                prop_assert!(amount > before);
                                prop_assert_eq!(requested, amount);
                                prop_assert_eq!(available, before);
                                prop_assert_eq!(ledger.current_balance(), before);
                            }
                        }
                    }
                }
                prop_assert!(ledger.current_balance() >= Decimal::ZERO);
            }
            Ok(())
        })?;
    }

    /// `recent_transactions(n)` is the last `n` records in reverse order.
    #[test]
    fn prop_recent_is_reverse_suffix(count in 0usize..30, limit in 0usize..40) {
        runtime().block_on(async {
            let store = Arc::new(KvStore::memory().unwrap());
            let mut ledger = LedgerStore::load(store, 10).await;
            let mut ids = Vec::new();
            for i in 0..count {
                let tx = ledger.record(
                    TransactionKind::Transfer,
                    Decimal::from(i + 1),
                    format!("contact {i}"),
                    TransactionOutcome::Success,
                    "transfer",
                );
                ids.push(tx.id());
            }

            let recent: Vec<_> = ledger.recent_transactions(limit).map(|tx| tx.id()).collect();
            let expected: Vec<_> = ids.iter().rev().take(limit).copied().collect();
            prop_assert_eq!(recent.len(), count.min(limit));
            prop_assert_eq!(recent, expected);
            Ok(())
        })?;
    }
}
