//! Validation result types.
//!
//! Validators never fail: they return one of these values and the caller
//! checks `is_valid()` before allowing a form to submit.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Result of validating a single input field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValidation {
    error: Option<String>,
}

impl FieldValidation {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self { error: None }
    }

    /// A failing result carrying a user-facing message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// Returns true if the field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The message to show under the field, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Serialize for FieldValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldValidation", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("error", &self.error)?;
        state.end()
    }
}

/// Result of validating a multi-field form.
///
/// Holds one message per failing field; every applicable error is collected
/// rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FormValidation<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FormValidation<F> {
    /// Creates an empty (passing) result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a single-field result in under `field`.
    pub fn check(&mut self, field: F, result: FieldValidation) {
        if let Some(message) = result.error {
            self.errors.insert(field, message);
        }
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn error(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All failing fields with their messages.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<F, String> {
        &self.errors
    }
}

impl<F: Ord + Serialize> Serialize for FormValidation<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormValidation", 2)?;
        state.serialize_field("valid", &self.errors.is_empty())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}
