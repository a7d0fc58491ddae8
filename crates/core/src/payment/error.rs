//! Payment error types.

use pocketpay_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors that stop a payment before anything is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Amount is zero, negative, or above the payment limit.
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Decimal),

    /// The wallet could not cover the payment.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl PaymentError {
    /// Returns the error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_PAYMENT_AMOUNT",
            Self::Ledger(e) => e.error_code(),
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidAmount(amount) => {
                Self::Validation(PaymentError::InvalidAmount(amount).to_string())
            }
            PaymentError::Ledger(e) => e.into(),
        }
    }
}
