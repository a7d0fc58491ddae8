//! Compiled input patterns.

use fancy_regex::Regex;
use once_cell::sync::Lazy;
use tracing::error;

type Pattern = Lazy<Option<Regex>>;

static VISA: Pattern = Lazy::new(|| Regex::new(r"^4[0-9]{12}(?:[0-9]{3})?$").ok());
static MASTERCARD: Pattern = Lazy::new(|| Regex::new(r"^5[1-5][0-9]{14}$").ok());
static BANK_ACCOUNT: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{9,18}$").ok());
static IFSC: Pattern = Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").ok());
static CONSUMER_NUMBER: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{6,12}$").ok());
static SUBSCRIBER_ID: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{10,12}$").ok());
static VEHICLE_NUMBER: Pattern =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{4}$").ok());
static MOBILE_NUMBER: Pattern = Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").ok());
static OTP: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{4}$").ok());
static UPI_PIN: Pattern = Lazy::new(|| Regex::new(r"^[0-9]{6}$").ok());

/// Matches `input` against `pattern`, rejecting on any regex failure.
fn matches(pattern: &Pattern, name: &str, input: &str) -> bool {
    match &**pattern {
        Some(re) => re.is_match(input).unwrap_or_else(|e| {
            error!(pattern = name, error = %e, "Pattern match failed, rejecting input");
            false
        }),
        None => {
            error!(pattern = name, "Pattern failed to compile, rejecting input");
            false
        }
    }
}

pub(crate) fn visa(digits: &str) -> bool {
    matches(&VISA, "visa", digits)
}

pub(crate) fn mastercard(digits: &str) -> bool {
    matches(&MASTERCARD, "mastercard", digits)
}

pub(crate) fn bank_account(input: &str) -> bool {
    matches(&BANK_ACCOUNT, "bank_account", input)
}

pub(crate) fn ifsc(input: &str) -> bool {
    matches(&IFSC, "ifsc", input)
}

pub(crate) fn consumer_number(input: &str) -> bool {
    matches(&CONSUMER_NUMBER, "consumer_number", input)
}

pub(crate) fn subscriber_id(input: &str) -> bool {
    matches(&SUBSCRIBER_ID, "subscriber_id", input)
}

pub(crate) fn vehicle_number(input: &str) -> bool {
    matches(&VEHICLE_NUMBER, "vehicle_number", input)
}

pub(crate) fn mobile_number(input: &str) -> bool {
    matches(&MOBILE_NUMBER, "mobile_number", input)
}

pub(crate) fn otp(input: &str) -> bool {
    matches(&OTP, "otp", input)
}

pub(crate) fn upi_pin(input: &str) -> bool {
    matches(&UPI_PIN, "upi_pin", input)
}
