//! Mobile number, OTP and UPI PIN validation.

use super::outcome::FieldValidation;
use super::patterns;

/// Validates an Indian mobile number: 10 digits starting with 6-9.
#[must_use]
pub fn validate_mobile_number(number: &str) -> FieldValidation {
    let number = number.trim();
    if number.is_empty() {
        FieldValidation::invalid("Mobile number is required")
    } else if !patterns::mobile_number(number) {
        FieldValidation::invalid("Enter a valid 10-digit mobile number")
    } else {
        FieldValidation::valid()
    }
}

/// Validates a login one-time password: exactly 4 digits.
#[must_use]
pub fn validate_otp(otp: &str) -> FieldValidation {
    let otp = otp.trim();
    if otp.is_empty() {
        FieldValidation::invalid("OTP is required")
    } else if !patterns::otp(otp) {
        FieldValidation::invalid("OTP must be 4 digits")
    } else {
        FieldValidation::valid()
    }
}

/// Validates a UPI PIN: exactly 6 digits. Asked for before every payment.
#[must_use]
pub fn validate_upi_pin(pin: &str) -> FieldValidation {
    if pin.is_empty() {
        FieldValidation::invalid("UPI PIN is required")
    } else if !patterns::upi_pin(pin) {
        FieldValidation::invalid("Please enter a 6-digit UPI PIN")
    } else {
        FieldValidation::valid()
    }
}
