//! Property-based tests for card and amount validation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::amount::{MAX_PAYMENT_AMOUNT, validate_amount};
use super::card::{CardField, CardIssuer, luhn_valid, validate_card_at};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Appends the digit that makes `body` pass the Luhn checksum.
fn with_check_digit(body: &str) -> String {
    (0..10)
        .map(|d| format!("{body}{d}"))
        .find(|candidate| luhn_valid(candidate))
        .unwrap()
}

/// Changes the last digit so the checksum fails.
fn break_check_digit(number: &str) -> String {
    let (body, last) = number.split_at(number.len() - 1);
    let last = last.parse::<u32>().unwrap();
    format!("{body}{}", (last + 1) % 10)
}

fn visa_body() -> impl Strategy<Value = String> {
    "[0-9]{14}".prop_map(|rest| format!("4{rest}"))
}

fn mastercard_body() -> impl Strategy<Value = String> {
    ("[1-5]", "[0-9]{13}").prop_map(|(second, rest)| format!("5{second}{rest}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every Luhn-valid 16-digit Visa number passes with the Visa issuer.
    #[test]
    fn prop_luhn_valid_visa_accepted(body in visa_body()) {
        let number = with_check_digit(&body);
        let result = validate_card_at(&number, "12/30", "123", "100", today());
        prop_assert!(result.is_valid(), "{:?}", result.form.errors());
        prop_assert_eq!(result.issuer, CardIssuer::Visa);
    }

    /// Every Luhn-valid Mastercard number passes with the Mastercard issuer.
    #[test]
    fn prop_luhn_valid_mastercard_accepted(body in mastercard_body()) {
        let number = with_check_digit(&body);
        let result = validate_card_at(&number, "12/30", "123", "100", today());
        prop_assert!(result.is_valid(), "{:?}", result.form.errors());
        prop_assert_eq!(result.issuer, CardIssuer::Mastercard);
    }

    /// A checksum failure is always reported on the card number field,
    /// whatever the other fields contain.
    #[test]
    fn prop_luhn_failure_rejected(
        body in "[0-9]{12,18}",
        expiry in "(0[1-9]|1[0-2])/[0-9]{2}",
        cvv in "[0-9]{3,4}",
        amount in 1i64..10_000_000,
    ) {
        let number = break_check_digit(&with_check_digit(&body));
        prop_assert!(!luhn_valid(&number));

        let amount = Decimal::new(amount, 2).to_string();
        let result = validate_card_at(&number, &expiry, &cvv, &amount, today());
        prop_assert!(!result.is_valid());
        prop_assert_eq!(result.error(CardField::CardNumber), Some("Invalid card number"));
    }

    /// Amounts in (0, 100000] pass; everything above fails.
    #[test]
    fn prop_amount_bounds(paise in -10_000_000i64..20_000_000i64) {
        let amount = Decimal::new(paise, 2);
        let result = validate_amount(&amount.to_string());
        let expected = amount > Decimal::ZERO && amount <= MAX_PAYMENT_AMOUNT;
        prop_assert_eq!(result.is_valid(), expected);
    }

    /// Validators are total: arbitrary text never panics.
    #[test]
    fn prop_arbitrary_input_never_panics(
        number in ".*",
        expiry in ".*",
        cvv in ".*",
        amount in ".*",
    ) {
        let _ = validate_card_at(&number, &expiry, &cvv, &amount, today());
    }
}
