//! Security error types.

use pocketpay_shared::AppError;
use thiserror::Error;

/// Errors from device security checks and screen capture control.
#[derive(Debug, Error)]
pub enum SecurityError {
    /// The platform device probe failed.
    #[error("device probe failed: {0}")]
    Probe(String),

    /// The platform screen capture API failed.
    #[error("screen capture control failed: {0}")]
    ScreenCapture(String),

    /// Screenshot prevention kept failing.
    #[error("screenshot prevention failed after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        /// Total attempts made.
        attempts: u32,
        /// Message of the last failure.
        last_error: String,
    },
}

impl SecurityError {
    /// Returns the error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Probe(_) => "DEVICE_PROBE_FAILED",
            Self::ScreenCapture(_) => "SCREEN_CAPTURE_FAILED",
            Self::RetriesExhausted { .. } => "SCREENSHOT_PREVENTION_EXHAUSTED",
        }
    }
}

impl From<SecurityError> for AppError {
    fn from(err: SecurityError) -> Self {
        Self::Internal(err.to_string())
    }
}
