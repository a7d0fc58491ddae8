//! Ledger error types.

use pocketpay_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A debit asked for more than the wallet holds.
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the caller tried to debit.
        requested: Decimal,
        /// Balance at the time of the request.
        available: Decimal,
    },
}

impl LedgerError {
    /// Returns the error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_and_code() {
        let err = LedgerError::InsufficientFunds {
            requested: dec!(300.00),
            available: dec!(200.00),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: requested 300.00, available 200.00"
        );
        assert_eq!(err.error_code(), "INSUFFICIENT_FUNDS");
        assert_eq!(AppError::from(err).error_code(), "BUSINESS_RULE_VIOLATION");
    }
}
