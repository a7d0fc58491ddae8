//! Platform biometric API seam.

use std::future::Future;

use super::error::SessionError;

/// Biometric methods a device may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiometricKind {
    /// Touch ID or an Android fingerprint sensor.
    Fingerprint,
    /// Face ID or Android face unlock.
    FacialRecognition,
    /// Iris scanner.
    Iris,
}

/// Text and behaviour of the system biometric prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiometricPrompt {
    /// Message shown in the prompt.
    pub message: String,
    /// Label of the passcode fallback button.
    pub fallback_label: String,
    /// Label of the cancel button.
    pub cancel_label: String,
    /// Whether the device passcode fallback is disabled.
    pub disable_device_fallback: bool,
}

impl Default for BiometricPrompt {
    fn default() -> Self {
        Self {
            message: "Authenticate to continue".to_string(),
            fallback_label: "Use passcode".to_string(),
            cancel_label: "Cancel".to_string(),
            disable_device_fallback: false,
        }
    }
}

/// Device biometric hardware, implemented by the platform layer.
pub trait BiometricAuthenticator: Send + Sync {
    /// Whether the device has biometric hardware.
    fn has_hardware(&self) -> impl Future<Output = Result<bool, SessionError>> + Send;

    /// Whether the user enrolled at least one biometric.
    fn is_enrolled(&self) -> impl Future<Output = Result<bool, SessionError>> + Send;

    /// Which biometric methods are available.
    fn supported_kinds(&self)
    -> impl Future<Output = Result<Vec<BiometricKind>, SessionError>> + Send;

    /// Shows the system prompt; `Ok(true)` when the user was recognised.
    fn authenticate(
        &self,
        prompt: &BiometricPrompt,
    ) -> impl Future<Output = Result<bool, SessionError>> + Send;
}
