//! Bill-payment identifier validation: electricity, DTH and FASTag.

use super::outcome::FieldValidation;
use super::patterns;

/// Validates an electricity consumer number: 6 to 12 digits.
#[must_use]
pub fn validate_consumer_number(id: &str) -> FieldValidation {
    let id = id.trim();
    if id.is_empty() {
        FieldValidation::invalid("Consumer number is required")
    } else if !patterns::consumer_number(id) {
        FieldValidation::invalid("Consumer number must be 6 to 12 digits")
    } else {
        FieldValidation::valid()
    }
}

/// Validates a DTH subscriber ID: 10 to 12 digits.
#[must_use]
pub fn validate_subscriber_id(id: &str) -> FieldValidation {
    let id = id.trim();
    if id.is_empty() {
        FieldValidation::invalid("Subscriber ID is required")
    } else if !patterns::subscriber_id(id) {
        FieldValidation::invalid("Subscriber ID must be 10 to 12 digits")
    } else {
        FieldValidation::valid()
    }
}

/// Validates a vehicle registration number such as `KA01AB1234`.
///
/// Two letters, two digits, one or two letters, four digits; case-insensitive.
#[must_use]
pub fn validate_vehicle_number(plate: &str) -> FieldValidation {
    let plate = plate.trim().to_ascii_uppercase();
    if plate.is_empty() {
        FieldValidation::invalid("Vehicle number is required")
    } else if !patterns::vehicle_number(&plate) {
        FieldValidation::invalid("Invalid vehicle number (e.g. KA01AB1234)")
    } else {
        FieldValidation::valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("123456", true)]
    #[case("123456789012", true)]
    #[case("12345", false)]
    #[case("1234567890123", false)]
    #[case("12345a", false)]
    fn test_consumer_number(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_consumer_number(input).is_valid(), valid);
    }

    #[rstest]
    #[case("1234567890", true)]
    #[case("123456789012", true)]
    #[case("123456789", false)]
    #[case("1234567890123", false)]
    fn test_subscriber_id(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_subscriber_id(input).is_valid(), valid);
    }

    #[rstest]
    #[case("KA01AB1234", true)]
    #[case("ka01ab1234", true)]
    #[case("MH12A1234", true)]
    #[case("KA1AB1234", false)]
    #[case("KA01ABC1234", false)]
    #[case("KA01AB123", false)]
    #[case("1A01AB1234", false)]
    fn test_vehicle_number(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate_vehicle_number(input).is_valid(), valid);
    }

    #[test]
    fn test_required_messages() {
        assert_eq!(
            validate_consumer_number("").error(),
            Some("Consumer number is required")
        );
        assert_eq!(
            validate_subscriber_id("").error(),
            Some("Subscriber ID is required")
        );
        assert_eq!(
            validate_vehicle_number("").error(),
            Some("Vehicle number is required")
        );
    }
}
