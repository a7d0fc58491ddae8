//! Credit card payment validation.
//!
//! A card passes only when its number satisfies the Luhn checksum *and* it
//! belongs to a supported issuer (Visa or Mastercard). Expiry, CVV and amount
//! are checked independently, so a single call reports every failing field.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use super::amount::validate_amount;
use super::outcome::{FieldValidation, FormValidation};
use super::patterns;

/// Card network detected from the number's prefix and length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardIssuer {
    /// `4` followed by 12 or 15 digits.
    Visa,
    /// `51`-`55` followed by 14 digits.
    Mastercard,
    /// Anything else.
    #[default]
    Unknown,
}

/// Fields of the card payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CardField {
    /// Card number.
    CardNumber,
    /// Expiry in `MM/YY`.
    ExpiryDate,
    /// Card verification value.
    Cvv,
    /// Payment amount.
    Amount,
}

/// Result of validating a card payment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardValidation {
    /// Per-field outcome.
    #[serde(flatten)]
    pub form: FormValidation<CardField>,
    /// Issuer detected from the card number.
    pub issuer: CardIssuer,
}

impl CardValidation {
    /// Returns true if every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn error(&self, field: CardField) -> Option<&str> {
        self.form.error(field)
    }
}

/// Luhn checksum over a string of ASCII digits.
///
/// Non-digit characters make the checksum fail.
#[must_use]
pub fn luhn_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    for (position, ch) in digits.chars().rev().enumerate() {
        let Some(mut digit) = ch.to_digit(10) else {
            return false;
        };
        if position % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Detects the issuer of an already-cleaned digit string.
#[must_use]
pub fn detect_issuer(digits: &str) -> CardIssuer {
    if patterns::visa(digits) {
        CardIssuer::Visa
    } else if patterns::mastercard(digits) {
        CardIssuer::Mastercard
    } else {
        CardIssuer::Unknown
    }
}

/// Validates a card payment form against today's date (UTC).
#[must_use]
pub fn validate_card(number: &str, expiry: &str, cvv: &str, amount: &str) -> CardValidation {
    validate_card_at(number, expiry, cvv, amount, Utc::now().date_naive())
}

/// Validates a card payment form as of `today`.
#[must_use]
pub fn validate_card_at(
    number: &str,
    expiry: &str,
    cvv: &str,
    amount: &str,
    today: NaiveDate,
) -> CardValidation {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let issuer = if digits.is_empty() {
        CardIssuer::Unknown
    } else {
        detect_issuer(&digits)
    };

    let mut form = FormValidation::new();
    form.check(CardField::CardNumber, check_number(&digits, issuer));
    form.check(CardField::ExpiryDate, validate_expiry(expiry, today));
    form.check(CardField::Cvv, validate_cvv(cvv));
    form.check(CardField::Amount, validate_amount(amount));

    CardValidation { form, issuer }
}

fn check_number(digits: &str, issuer: CardIssuer) -> FieldValidation {
    if digits.is_empty() {
        FieldValidation::invalid("Card number is required")
    } else if !luhn_valid(digits) {
        FieldValidation::invalid("Invalid card number")
    } else if issuer == CardIssuer::Unknown {
        FieldValidation::invalid("Only Visa and Mastercard are supported")
    } else {
        FieldValidation::valid()
    }
}

/// Validates an `MM/YY` expiry; the card is usable through its expiry month.
#[must_use]
pub fn validate_expiry(expiry: &str, today: NaiveDate) -> FieldValidation {
    let expiry = expiry.trim();
    if expiry.is_empty() {
        return FieldValidation::invalid("Expiry date is required");
    }

    let Some((month, year)) = parse_expiry(expiry) else {
        return FieldValidation::invalid("Invalid expiry date format");
    };

    if !(1..=12).contains(&month) {
        return FieldValidation::invalid("Invalid month");
    }

    let current_year = today.year().rem_euclid(100).unsigned_abs();
    let current_month = today.month();
    if (year, month) < (current_year, current_month) {
        return FieldValidation::invalid("Card has expired");
    }

    FieldValidation::valid()
}

/// Splits `MM/YY` into (month, two-digit year).
fn parse_expiry(expiry: &str) -> Option<(u32, u32)> {
    let (month, year) = expiry.split_once('/')?;
    let (month, year) = (month.trim(), year.trim());

    let month_ok = (1..=2).contains(&month.len()) && month.chars().all(|c| c.is_ascii_digit());
    let year_ok = year.len() == 2 && year.chars().all(|c| c.is_ascii_digit());
    if !month_ok || !year_ok {
        return None;
    }

    Some((month.parse().ok()?, year.parse().ok()?))
}

/// Validates a CVV: 3 or 4 digits.
#[must_use]
pub fn validate_cvv(cvv: &str) -> FieldValidation {
    let cvv = cvv.trim();
    if cvv.is_empty() {
        return FieldValidation::invalid("CVV is required");
    }
    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return FieldValidation::invalid("CVV must be 3 or 4 digits");
    }
    FieldValidation::valid()
}
