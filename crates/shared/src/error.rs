//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Module-level errors in the core crate convert into this taxonomy so that
/// a front-end only has to map one set of codes to user-facing messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// User input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (e.g. insufficient balance).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Local key-value storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The device does not support the requested capability.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for front-end message lookup.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Unsupported(_) => "UNSUPPORTED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the user should see this error's message.
    ///
    /// Storage and internal failures are logged and kept off screen.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::BusinessRule(_) | Self::Unsupported(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Validation(String::new()), "VALIDATION_ERROR", true)]
    #[case(AppError::BusinessRule(String::new()), "BUSINESS_RULE_VIOLATION", true)]
    #[case(AppError::Storage(String::new()), "STORAGE_ERROR", false)]
    #[case(AppError::Unsupported(String::new()), "UNSUPPORTED", true)]
    #[case(AppError::Internal(String::new()), "INTERNAL_ERROR", false)]
    fn test_error_codes(#[case] err: AppError, #[case] code: &str, #[case] user_facing: bool) {
        assert_eq!(err.error_code(), code);
        assert_eq!(err.is_user_facing(), user_facing);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::BusinessRule("msg".into()).to_string(),
            "Business rule violation: msg"
        );
        assert_eq!(
            AppError::Storage("msg".into()).to_string(),
            "Storage error: msg"
        );
        assert_eq!(
            AppError::Unsupported("msg".into()).to_string(),
            "Unsupported: msg"
        );
    }
}
