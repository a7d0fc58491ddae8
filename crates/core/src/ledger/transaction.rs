//! Wallet transaction record.

use chrono::{DateTime, Utc};
use pocketpay_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What kind of movement a transaction represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Bill or merchant payment.
    Payment,
    /// Money sent to a bank account or contact.
    Transfer,
    /// Mobile, DTH or FASTag top-up.
    Recharge,
}

/// How the (simulated) payment attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionOutcome {
    /// The gateway accepted the payment.
    Success,
    /// The gateway rejected the payment.
    Failed,
}

/// A recorded payment attempt.
///
/// Fields are fixed at creation; the ledger is append-only, so there are no
/// setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    amount: Decimal,
    counterparty: String,
    outcome: TransactionOutcome,
    memo: String,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a record with a fresh id and the current time.
    pub(crate) fn new(
        kind: TransactionKind,
        amount: Decimal,
        counterparty: impl Into<String>,
        outcome: TransactionOutcome,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            counterparty: counterparty.into(),
            outcome,
            memo: memo.into(),
            created_at: Utc::now(),
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Payment, transfer or recharge.
    #[must_use]
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount in rupees.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Recipient name, account or service identifier.
    #[must_use]
    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    /// Success or failure.
    #[must_use]
    pub fn outcome(&self) -> TransactionOutcome {
        self.outcome
    }

    /// Free-text description.
    #[must_use]
    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// When the transaction was recorded.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if the payment went through.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == TransactionOutcome::Success
    }
}
