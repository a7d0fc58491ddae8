//! Payment input validation.
//!
//! Pure, side-effect-free checks run by forms before a payment may be
//! submitted:
//! - Card payments (Luhn checksum, issuer, expiry, CVV, amount)
//! - Bank transfers (account number, IFSC)
//! - Bill identifiers (consumer number, subscriber ID, vehicle number)
//! - Contact and auth inputs (mobile number, OTP, UPI PIN)
//! - Amounts (greater than 0, at most ₹100,000)
//!
//! Validators never return errors; every result carries a validity flag and
//! user-facing messages per field.

pub mod amount;
pub mod bank;
pub mod billing;
pub mod card;
pub mod contact;
pub mod outcome;
mod patterns;

#[cfg(test)]
mod validation_props;

pub use amount::{MAX_PAYMENT_AMOUNT, parse_amount, validate_amount};
pub use bank::{BankField, validate_bank_account};
pub use billing::{validate_consumer_number, validate_subscriber_id, validate_vehicle_number};
pub use card::{CardField, CardIssuer, CardValidation, luhn_valid, validate_card, validate_card_at};
pub use contact::{validate_mobile_number, validate_otp, validate_upi_pin};
pub use outcome::{FieldValidation, FormValidation};
