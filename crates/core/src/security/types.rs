//! Platform seams and policy for the security service.

use std::future::Future;
use std::time::Duration;

use pocketpay_shared::config::SecuritySettings;

use super::error::SecurityError;

/// Operating system the app runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Android.
    Android,
    /// iOS.
    Ios,
    /// Anything else (web, desktop).
    Other,
}

/// Foreground state reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    /// In the foreground and receiving input.
    Active,
    /// Visible but not receiving input.
    Inactive,
    /// Not visible.
    Background,
}

/// Device facts needed by the integrity check.
pub trait DeviceProbe: Send + Sync {
    /// The running platform.
    fn platform(&self) -> Platform;

    /// Whether an Android device appears rooted.
    fn is_rooted(&self) -> impl Future<Output = Result<bool, SecurityError>> + Send;
}

/// Platform screen capture blocking.
pub trait ScreenCaptureControl: Send + Sync {
    /// Blocks screenshots and screen recording.
    fn prevent(&self) -> impl Future<Output = Result<(), SecurityError>> + Send;

    /// Allows screenshots again.
    fn allow(&self) -> impl Future<Output = Result<(), SecurityError>> + Send;
}

/// Tuning for the security service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityPolicy {
    /// Prevention calls per request.
    pub screenshot_attempts: u32,
    /// Wait before retrying after a failure.
    pub retry_delay: Duration,
    /// Retries after the first failed request.
    pub max_retries: u32,
    /// Debug builds fail the tampering check.
    pub debug_build: bool,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self::from(&SecuritySettings::default())
    }
}

impl From<&SecuritySettings> for SecurityPolicy {
    fn from(settings: &SecuritySettings) -> Self {
        Self {
            screenshot_attempts: settings.screenshot_attempts,
            retry_delay: Duration::from_millis(settings.retry_delay_ms),
            max_retries: settings.max_retries,
            debug_build: settings.debug_build,
        }
    }
}
