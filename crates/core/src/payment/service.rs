//! Simulated payment processing against the wallet ledger.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use super::biller::Biller;
use super::error::PaymentError;
use super::outcome::OutcomeSource;
use crate::ledger::{LedgerStore, Transaction, TransactionOutcome};
use crate::storage::KeyValueStore;
use crate::validation::MAX_PAYMENT_AMOUNT;

/// A payment the user confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Destination.
    pub biller: Biller,
    /// Amount in rupees.
    pub amount: Decimal,
    /// Recipient name, account or service identifier.
    pub counterparty: String,
    /// History memo; defaults to the biller's description.
    pub memo: Option<String>,
}

impl PaymentRequest {
    /// Creates a request with the default memo.
    pub fn new(biller: Biller, amount: Decimal, counterparty: impl Into<String>) -> Self {
        Self {
            biller,
            amount,
            counterparty: counterparty.into(),
            memo: None,
        }
    }

    /// Sets the history memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// What the success or failure screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// The recorded history entry.
    pub transaction: Transaction,
    /// Gateway message when the payment failed.
    pub failure_reason: Option<&'static str>,
    /// Wallet balance after the payment settled.
    pub balance: Decimal,
}

impl PaymentReceipt {
    /// Returns true if the gateway accepted the payment.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure_reason.is_none()
    }
}

/// Runs simulated gateway payments.
pub struct PaymentService<O: OutcomeSource> {
    outcomes: O,
}

impl<O: OutcomeSource> PaymentService<O> {
    /// Create a new payment service.
    pub fn new(outcomes: O) -> Self {
        Self { outcomes }
    }

    /// Sends a payment through the biller's simulated gateway.
    ///
    /// Wallet billers debit up front and are refunded if the gateway fails.
    /// Exactly one transaction is recorded whenever this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for an amount outside (0, ₹100,000], or
    /// `InsufficientFunds` when a wallet biller cannot be covered. Nothing is
    /// recorded in either case.
    pub async fn pay<S: KeyValueStore>(
        &self,
        ledger: &mut LedgerStore<S>,
        request: PaymentRequest,
    ) -> Result<PaymentReceipt, PaymentError> {
        let PaymentRequest {
            biller,
            amount,
            counterparty,
            memo,
        } = request;
        check_amount(amount)?;

        if biller.debits_wallet() {
            ledger.debit(amount).await?;
        }

        let success = biller.succeeds(self.outcomes.sample());
        if !success && biller.debits_wallet() {
            ledger.credit(amount).await;
        }

        let outcome = if success {
            TransactionOutcome::Success
        } else {
            TransactionOutcome::Failed
        };
        let memo = memo.unwrap_or_else(|| biller.description().to_string());
        let transaction = ledger.record(biller.transaction_kind(), amount, counterparty, outcome, memo);

        let failure_reason = if success {
            info!(id = %transaction.id(), %biller, %amount, "Payment succeeded");
            None
        } else {
            let reason = biller.failure_reason();
            warn!(id = %transaction.id(), %biller, %amount, reason, "Payment failed");
            Some(reason)
        };

        Ok(PaymentReceipt {
            transaction,
            failure_reason,
            balance: ledger.current_balance(),
        })
    }

    /// Tops up the wallet and returns the new balance. No transaction is recorded.
    pub async fn add_money<S: KeyValueStore>(
        &self,
        ledger: &mut LedgerStore<S>,
        amount: Decimal,
    ) -> Result<Decimal, PaymentError> {
        check_amount(amount)?;
        let balance = ledger.credit(amount).await;
        info!(%amount, %balance, "Wallet topped up");
        Ok(balance)
    }
}

fn check_amount(amount: Decimal) -> Result<(), PaymentError> {
    if amount <= Decimal::ZERO || amount > MAX_PAYMENT_AMOUNT {
        return Err(PaymentError::InvalidAmount(amount));
    }
    Ok(())
}
