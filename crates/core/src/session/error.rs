//! Session error types.

use pocketpay_shared::AppError;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors from auth session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Biometric unlock was requested on a device that cannot do it.
    #[error("Biometric authentication is not supported on this device")]
    BiometricUnsupported,

    /// The platform biometric API failed.
    #[error("Biometric authenticator error: {0}")]
    Authenticator(String),

    /// Persisting the session setting failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Returns the error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BiometricUnsupported => "BIOMETRIC_UNSUPPORTED",
            Self::Authenticator(_) => "BIOMETRIC_AUTHENTICATOR_ERROR",
            Self::Storage(e) => e.error_code(),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::BiometricUnsupported => {
                Self::Unsupported(SessionError::BiometricUnsupported.to_string())
            }
            SessionError::Authenticator(msg) => Self::Internal(msg),
            SessionError::Storage(e) => e.into(),
        }
    }
}
