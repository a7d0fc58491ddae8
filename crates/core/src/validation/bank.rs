//! Bank transfer validation.

use serde::Serialize;

use super::outcome::{FieldValidation, FormValidation};
use super::patterns;

/// Fields of the bank transfer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BankField {
    /// Beneficiary account number.
    AccountNumber,
    /// Branch IFSC code.
    IfscCode,
}

/// Validates a beneficiary account number (9 to 18 digits) and IFSC code.
///
/// The IFSC code is matched case-insensitively: four letters, a literal `0`,
/// then six letters or digits.
#[must_use]
pub fn validate_bank_account(account_number: &str, ifsc: &str) -> FormValidation<BankField> {
    let mut form = FormValidation::new();
    form.check(BankField::AccountNumber, validate_account_number(account_number));
    form.check(BankField::IfscCode, validate_ifsc(ifsc));
    form
}

/// Validates an account number alone.
#[must_use]
pub fn validate_account_number(account_number: &str) -> FieldValidation {
    let account_number = account_number.trim();
    if account_number.is_empty() {
        FieldValidation::invalid("Account number is required")
    } else if !patterns::bank_account(account_number) {
        FieldValidation::invalid("Account number must be 9 to 18 digits")
    } else {
        FieldValidation::valid()
    }
}

/// Validates an IFSC code alone.
#[must_use]
pub fn validate_ifsc(ifsc: &str) -> FieldValidation {
    let ifsc = ifsc.trim().to_ascii_uppercase();
    if ifsc.is_empty() {
        FieldValidation::invalid("IFSC code is required")
    } else if !patterns::ifsc(&ifsc) {
        FieldValidation::invalid("Invalid IFSC code")
    } else {
        FieldValidation::valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_transfer() {
        let result = validate_bank_account("123456789012", "SBIN0001234");
        assert!(result.is_valid());
    }

    #[test]
    fn test_ifsc_case_insensitive() {
        assert!(validate_ifsc("hdfc0abc123").is_valid());
    }

    #[rstest]
    #[case("12345678", "Account number must be 9 to 18 digits")]
    #[case("1234567890123456789", "Account number must be 9 to 18 digits")]
    #[case("12345678A", "Account number must be 9 to 18 digits")]
    #[case("", "Account number is required")]
    fn test_bad_account_numbers(#[case] input: &str, #[case] message: &str) {
        let result = validate_bank_account(input, "SBIN0001234");
        assert_eq!(result.error(BankField::AccountNumber), Some(message));
        assert_eq!(result.error(BankField::IfscCode), None);
    }

    #[rstest]
    #[case("SBIN1001234", "Invalid IFSC code")]
    #[case("SBI00001234", "Invalid IFSC code")]
    #[case("SBIN000123", "Invalid IFSC code")]
    #[case("SBIN0-01234", "Invalid IFSC code")]
    #[case(" ", "IFSC code is required")]
    fn test_bad_ifsc(#[case] input: &str, #[case] message: &str) {
        assert_eq!(validate_ifsc(input).error(), Some(message));
    }

    #[test]
    fn test_both_fields_reported() {
        let result = validate_bank_account("", "");
        assert_eq!(result.errors().len(), 2);
    }
}
