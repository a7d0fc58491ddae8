//! Device integrity checks and screenshot prevention.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, warn};

use super::error::SecurityError;
use super::types::{AppState, DeviceProbe, Platform, ScreenCaptureControl, SecurityPolicy};

/// Security checks for a single app instance.
///
/// Owned by the app shell and passed to whoever needs it. Platform access goes
/// through the injected [`DeviceProbe`] and [`ScreenCaptureControl`].
pub struct SecurityService<D: DeviceProbe, C: ScreenCaptureControl> {
    probe: D,
    capture: C,
    policy: SecurityPolicy,
    prevention_active: AtomicBool,
}

impl<D: DeviceProbe, C: ScreenCaptureControl> SecurityService<D, C> {
    /// Create a new security service.
    pub fn new(probe: D, capture: C, policy: SecurityPolicy) -> Self {
        Self {
            probe,
            capture,
            policy,
            prevention_active: AtomicBool::new(false),
        }
    }

    /// Returns true if screenshot prevention is currently on.
    #[must_use]
    pub fn is_prevention_active(&self) -> bool {
        self.prevention_active.load(Ordering::SeqCst)
    }

    /// Returns false on a rooted or jailbroken device, or when the probe fails.
    pub async fn check_device_security(&self) -> bool {
        match self.probe.platform() {
            Platform::Android => match self.probe.is_rooted().await {
                Ok(true) => {
                    warn!("Device is rooted");
                    false
                }
                Ok(false) => true,
                Err(e) => {
                    error!(error = %e, "Failed to check device security");
                    false
                }
            },
            Platform::Ios => {
                if ios_jailbroken() {
                    warn!("Device is jailbroken");
                    return false;
                }
                true
            }
            Platform::Other => true,
        }
    }

    /// Returns false for debug builds.
    ///
    /// Release builds always pass: signature verification is not implemented.
    pub fn check_app_tampering(&self) -> bool {
        if self.policy.debug_build {
            warn!("App is running in debug mode");
            return false;
        }
        true
    }

    /// Turns on screenshot prevention.
    ///
    /// Each request calls the platform `screenshot_attempts` times. A failed
    /// request is retried after `retry_delay`, at most `max_retries` times.
    pub async fn prevent_screenshots(&self) -> Result<(), SecurityError> {
        let mut retries = 0;
        loop {
            match self.apply_prevention().await {
                Ok(()) => return Ok(()),
                Err(e) if retries < self.policy.max_retries => {
                    retries += 1;
                    warn!(error = %e, retry = retries, "Screenshot prevention failed, retrying");
                    tokio::time::sleep(self.policy.retry_delay).await;
                }
                Err(e) => {
                    error!(error = %e, "Screenshot prevention failed");
                    return Err(retries_exhausted(retries, &e));
                }
            }
        }
    }

    /// Turns screenshot prevention off if it is on. Failures are logged.
    pub async fn allow_screenshots(&self) {
        if !self.is_prevention_active() {
            return;
        }
        match self.capture.allow().await {
            Ok(()) => {
                self.prevention_active.store(false, Ordering::SeqCst);
                debug!("Screenshots allowed");
            }
            Err(e) => error!(error = %e, "Failed to allow screenshots"),
        }
    }

    /// Re-applies prevention when the app returns to the foreground.
    pub async fn on_app_state_change(&self, state: AppState) {
        if state == AppState::Active {
            // Already logged by prevent_screenshots.
            let _ = self.prevent_screenshots().await;
        }
    }

    async fn apply_prevention(&self) -> Result<(), SecurityError> {
        for _ in 0..self.policy.screenshot_attempts {
            self.capture.prevent().await?;
        }
        if self.policy.screenshot_attempts > 0 {
            self.prevention_active.store(true, Ordering::SeqCst);
        }
        Ok(())
    }
}

/// The error for a request that failed on its last allowed retry.
fn retries_exhausted(retries: u32, last: &SecurityError) -> SecurityError {
    SecurityError::RetriesExhausted {
        attempts: retries.saturating_add(1),
        last_error: last.to_string(),
    }
}

/// Placeholder: no jailbreak detection is performed yet.
fn ios_jailbroken() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    use super::*;

    struct FakeProbe {
        platform: Platform,
        rooted: Result<bool, String>,
    }

    impl FakeProbe {
        fn new(platform: Platform, rooted: Result<bool, String>) -> Self {
            Self { platform, rooted }
        }
    }

    impl DeviceProbe for FakeProbe {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn is_rooted(&self) -> Result<bool, SecurityError> {
            self.rooted.clone().map_err(SecurityError::Probe)
        }
    }

    /// Fails the first `failures` prevent calls, and every call from
    /// `fail_from_call` on.
    #[derive(Default)]
    struct FakeCapture {
        failures: AtomicU32,
        fail_from_call: Option<u32>,
        prevent_calls: AtomicU32,
        allow_calls: AtomicU32,
    }

    impl FakeCapture {
        fn failing(failures: u32) -> Self {
            Self {
                failures: AtomicU32::new(failures),
                ..Self::default()
            }
        }
    }

    impl ScreenCaptureControl for FakeCapture {
        async fn prevent(&self) -> Result<(), SecurityError> {
            let call = self.prevent_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_from_call.is_some_and(|from| call >= from) {
                return Err(SecurityError::ScreenCapture("surface lost".to_string()));
            }
            let remaining = self.failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures.store(remaining - 1, Ordering::SeqCst);
                return Err(SecurityError::ScreenCapture("window not ready".to_string()));
            }
            Ok(())
        }

        async fn allow(&self) -> Result<(), SecurityError> {
            self.allow_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn fast_policy() -> SecurityPolicy {
        SecurityPolicy {
            retry_delay: Duration::from_millis(1),
            ..SecurityPolicy::default()
        }
    }

    fn service(
        probe: FakeProbe,
        capture: FakeCapture,
    ) -> SecurityService<FakeProbe, FakeCapture> {
        SecurityService::new(probe, capture, fast_policy())
    }

    #[tokio::test]
    async fn test_device_security() {
        let android_ok = service(FakeProbe::new(Platform::Android, Ok(false)), FakeCapture::default());
        assert!(android_ok.check_device_security().await);

        let rooted = service(FakeProbe::new(Platform::Android, Ok(true)), FakeCapture::default());
        assert!(!rooted.check_device_security().await);

        let detection_error = service(
            FakeProbe::new(Platform::Android, Err("permission denied".to_string())),
            FakeCapture::default(),
        );
        assert!(!detection_error.check_device_security().await);

        let ios = service(FakeProbe::new(Platform::Ios, Ok(true)), FakeCapture::default());
        assert!(ios.check_device_security().await);
    }

    #[test]
    fn test_app_tampering() {
        let release = service(FakeProbe::new(Platform::Other, Ok(false)), FakeCapture::default());
        assert!(release.check_app_tampering());

        let debug = SecurityService::new(
            FakeProbe::new(Platform::Other, Ok(false)),
            FakeCapture::default(),
            SecurityPolicy {
                debug_build: true,
                ..fast_policy()
            },
        );
        assert!(!debug.check_app_tampering());
    }

    #[tokio::test]
    async fn test_prevent_applies_every_attempt() {
        let security = service(FakeProbe::new(Platform::Android, Ok(false)), FakeCapture::default());
        security.prevent_screenshots().await.unwrap();
        assert!(security.is_prevention_active());
        assert_eq!(security.capture.prevent_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_prevent_retries_after_failure() {
        let security = service(FakeProbe::new(Platform::Android, Ok(false)), FakeCapture::failing(1));
        security.prevent_screenshots().await.unwrap();
        assert!(security.is_prevention_active());
        // One failed call, then a full request of three.
        assert_eq!(security.capture.prevent_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_prevent_gives_up_after_max_retries() {
        let security = service(FakeProbe::new(Platform::Ios, Ok(false)), FakeCapture::failing(u32::MAX));
        let err = security.prevent_screenshots().await.unwrap_err();
        assert!(matches!(err, SecurityError::RetriesExhausted { attempts: 4, .. }));
        assert!(!security.is_prevention_active());
        assert_eq!(security.capture.prevent_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_partial_request_does_not_activate_prevention() {
        let capture = FakeCapture {
            fail_from_call: Some(1),
            ..FakeCapture::default()
        };
        let security = SecurityService::new(
            FakeProbe::new(Platform::Android, Ok(false)),
            capture,
            SecurityPolicy {
                max_retries: 0,
                ..fast_policy()
            },
        );

        let err = security.prevent_screenshots().await.unwrap_err();
        assert!(matches!(err, SecurityError::RetriesExhausted { attempts: 1, .. }));
        assert!(!security.is_prevention_active());
        assert_eq!(security.capture.prevent_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_attempt_count_saturates() {
        let last = SecurityError::ScreenCapture("surface lost".to_string());
        let err = retries_exhausted(u32::MAX, &last);
        assert!(matches!(err, SecurityError::RetriesExhausted { attempts: u32::MAX, .. }));
        assert_eq!(err.error_code(), "SCREENSHOT_PREVENTION_EXHAUSTED");
    }

    #[tokio::test]
    async fn test_allow_only_when_active() {
        let security = service(FakeProbe::new(Platform::Ios, Ok(false)), FakeCapture::default());
        security.allow_screenshots().await;
        assert_eq!(security.capture.allow_calls.load(Ordering::SeqCst), 0);

        security.prevent_screenshots().await.unwrap();
        security.allow_screenshots().await;
        assert_eq!(security.capture.allow_calls.load(Ordering::SeqCst), 1);
        assert!(!security.is_prevention_active());
    }

    #[tokio::test]
    async fn test_foreground_reapplies_prevention() {
        let security = service(FakeProbe::new(Platform::Ios, Ok(false)), FakeCapture::default());
        security.on_app_state_change(AppState::Background).await;
        assert!(!security.is_prevention_active());

        security.on_app_state_change(AppState::Active).await;
        assert!(security.is_prevention_active());
    }
}
