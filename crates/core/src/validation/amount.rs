//! Monetary amount validation.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::outcome::FieldValidation;

/// Largest amount a single payment may carry, in rupees.
pub const MAX_PAYMENT_AMOUNT: Decimal = dec!(100000);

/// How a user-entered amount failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmountParseError {
    /// Not a plain decimal number.
    Malformed,
    /// Well-formed but beyond what `Decimal` can hold.
    Overflow {
        /// Sign of the overflowing number.
        negative: bool,
    },
}

/// Parses a plain decimal: optional sign, digits, at most one `.`.
///
/// Exponents, digit separators and other `Decimal` extensions are rejected.
fn parse_plain(input: &str) -> Result<Decimal, AmountParseError> {
    let input = input.trim();
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(AmountParseError::Malformed);
    }

    Decimal::from_str(input).map_err(|_| {
        let significant = whole.trim_start_matches('0');
        if significant.len() > 6 {
            AmountParseError::Overflow { negative }
        } else {
            AmountParseError::Malformed
        }
    })
}

/// Parses a user-entered amount, returning `None` for anything but a plain
/// decimal number that fits in a `Decimal`.
#[must_use]
pub fn parse_amount(input: &str) -> Option<Decimal> {
    parse_plain(input).ok()
}

/// Validates a payment amount: numeric, greater than 0, at most ₹100,000.
#[must_use]
pub fn validate_amount(input: &str) -> FieldValidation {
    if input.trim().is_empty() {
        return FieldValidation::invalid("Amount is required");
    }

    match parse_plain(input) {
        Err(AmountParseError::Malformed) => FieldValidation::invalid("Invalid amount"),
        Err(AmountParseError::Overflow { negative: true }) => {
            FieldValidation::invalid("Amount must be greater than 0")
        }
        Err(AmountParseError::Overflow { negative: false }) => {
            FieldValidation::invalid("Amount cannot exceed ₹100,000")
        }
        Ok(amount) if amount <= Decimal::ZERO => {
            FieldValidation::invalid("Amount must be greater than 0")
        }
        Ok(amount) if amount > MAX_PAYMENT_AMOUNT => {
            FieldValidation::invalid("Amount cannot exceed ₹100,000")
        }
        Ok(_) => FieldValidation::valid(),
    }
}
