//! In-memory wallet ledger with best-effort balance persistence.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use super::error::LedgerError;
use super::transaction::{Transaction, TransactionKind, TransactionOutcome};
use crate::storage::{KeyValueStore, keys};

/// How many transactions the recent-history view shows by default.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Wallet balance plus the session's transaction history.
///
/// The balance is loaded once from storage and written back after every
/// change. Transactions live in memory only. The two are independent: a
/// credit or debit does not record a transaction, and recording a
/// transaction does not move the balance.
///
/// A failed balance write is logged and does not undo the in-memory change.
pub struct LedgerStore<S: KeyValueStore> {
    store: Arc<S>,
    balance: Decimal,
    /// Oldest first; read back in reverse.
    transactions: Vec<Transaction>,
    recent_limit: usize,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Creates the ledger, loading the persisted balance.
    ///
    /// A missing, unreadable, unparsable or negative balance starts the wallet
    /// at zero.
    pub async fn load(store: Arc<S>, recent_limit: usize) -> Self {
        let balance = match store.get(keys::WALLET_BALANCE).await {
            Ok(Some(raw)) => match Decimal::from_str(raw.trim()) {
                Ok(balance) if balance.is_sign_negative() && !balance.is_zero() => {
                    warn!(value = %raw, "Ignoring negative wallet balance");
                    Decimal::ZERO
                }
                Ok(balance) => balance,
                Err(e) => {
                    warn!(value = %raw, error = %e, "Ignoring unparsable wallet balance");
                    Decimal::ZERO
                }
            },
            Ok(None) => Decimal::ZERO,
            Err(e) => {
                error!(key = keys::WALLET_BALANCE, error = %e, "Failed to load wallet balance");
                Decimal::ZERO
            }
        };

        debug!(%balance, "Wallet balance loaded");

        Self {
            store,
            balance,
            transactions: Vec::new(),
            recent_limit,
        }
    }

    /// Appends a transaction and returns it.
    ///
    /// Inputs are not validated here; forms validate before paying.
    pub fn record(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        counterparty: impl Into<String>,
        outcome: TransactionOutcome,
        memo: impl Into<String>,
    ) -> Transaction {
        let tx = Transaction::new(kind, amount, counterparty, outcome, memo);
        info!(
            id = %tx.id(),
            kind = ?tx.kind(),
            amount = %tx.amount(),
            outcome = ?tx.outcome(),
            "Transaction recorded"
        );
        self.transactions.push(tx.clone());
        tx
    }

    /// The `limit` most recent transactions, newest first.
    pub fn recent_transactions(&self, limit: usize) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev().take(limit)
    }

    /// Recent transactions using the configured limit.
    pub fn recent(&self) -> impl Iterator<Item = &Transaction> {
        self.recent_transactions(self.recent_limit)
    }

    /// Every transaction of this session, newest first.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    /// Number of recorded transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Current in-memory balance.
    #[must_use]
    pub fn current_balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// Callers pass a positive amount; the ledger does not check. A credit
    /// that would overflow the balance is logged and dropped.
    pub async fn credit(&mut self, amount: Decimal) -> Decimal {
        if amount <= Decimal::ZERO {
            warn!(%amount, "Crediting a non-positive amount");
        }
        let Some(balance) = self.balance.checked_add(amount) else {
            error!(%amount, balance = %self.balance, "Credit would overflow the wallet balance");
            return self.balance;
        };
        self.balance = balance;
        self.persist_balance().await;
        self.balance
    }

    /// Removes `amount` from the balance and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` without touching the balance when
    /// `amount` exceeds it.
    pub async fn debit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.persist_balance().await;
        Ok(self.balance)
    }

    async fn persist_balance(&self) {
        if let Err(e) = self
            .store
            .set(keys::WALLET_BALANCE, &self.balance.to_string())
            .await
        {
            error!(
                key = keys::WALLET_BALANCE,
                balance = %self.balance,
                error = %e,
                "Failed to persist wallet balance"
            );
        }
    }
}
