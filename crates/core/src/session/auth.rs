//! Authentication session with a sliding freshness window.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{error, info, warn};

use super::biometric::{BiometricAuthenticator, BiometricPrompt};
use super::clock::Clock;
use super::error::SessionError;
use crate::storage::{KeyValueStore, keys};

/// Seconds an authentication stays fresh unless configured otherwise.
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 300;

/// Converts a configured timeout into a `TimeDelta`, saturating on overflow.
#[must_use]
pub fn session_timeout(secs: u64) -> TimeDelta {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}

/// Login state, last authentication time and the biometric unlock setting.
///
/// `lastAuthTime` (epoch milliseconds) and `biometricEnabled` are persisted.
/// A session restored within the timeout counts as logged in.
pub struct AuthSession<S: KeyValueStore, C: Clock> {
    store: Arc<S>,
    clock: C,
    timeout: TimeDelta,
    authenticated: bool,
    biometric_enabled: bool,
    last_auth: Option<DateTime<Utc>>,
}

impl<S: KeyValueStore, C: Clock> AuthSession<S, C> {
    /// Restores the session from storage.
    pub async fn load(store: Arc<S>, clock: C, timeout: TimeDelta) -> Self {
        let mut session = Self {
            store,
            clock,
            timeout,
            authenticated: false,
            biometric_enabled: false,
            last_auth: None,
        };

        match session.store.get(keys::BIOMETRIC_ENABLED).await {
            Ok(value) => session.biometric_enabled = value.as_deref() == Some("true"),
            Err(e) => error!(key = keys::BIOMETRIC_ENABLED, error = %e, "Failed to load biometric setting"),
        }

        match session.store.get(keys::LAST_AUTH_TIME).await {
            Ok(Some(raw)) => match parse_millis(&raw) {
                Some(at) if session.is_fresh(at) => {
                    session.authenticated = true;
                    session.last_auth = Some(at);
                    info!(last_auth = %at, "Restored auth session");
                }
                Some(_) => {}
                None => warn!(value = %raw, "Ignoring unparsable last auth time"),
            },
            Ok(None) => {}
            Err(e) => error!(key = keys::LAST_AUTH_TIME, error = %e, "Failed to load auth session"),
        }

        session
    }

    /// Whether the user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether biometric unlock is turned on.
    #[must_use]
    pub fn is_biometric_enabled(&self) -> bool {
        self.biometric_enabled
    }

    /// Time of the last successful authentication in this session.
    #[must_use]
    pub fn last_auth(&self) -> Option<DateTime<Utc>> {
        self.last_auth
    }

    /// Marks the user logged in and stamps the authentication time.
    pub async fn login(&mut self) {
        self.authenticated = true;
        self.stamp().await;
        info!("User logged in");
    }

    /// Logs the user out and forgets the authentication time.
    pub async fn logout(&mut self) {
        self.authenticated = false;
        self.last_auth = None;
        if let Err(e) = self.store.remove(keys::LAST_AUTH_TIME).await {
            error!(key = keys::LAST_AUTH_TIME, error = %e, "Failed to clear auth session");
        }
        info!("User logged out");
    }

    /// Whether the device can do biometric unlock: hardware present, a
    /// biometric enrolled, and at least one supported method.
    pub async fn check_biometric_support<B: BiometricAuthenticator>(&self, biometrics: &B) -> bool {
        match biometric_support(biometrics).await {
            Ok(supported) => supported,
            Err(e) => {
                error!(error = %e, "Failed to check biometric support");
                false
            }
        }
    }

    /// Confirms the user's identity, prompting only when the last
    /// authentication is older than the timeout.
    ///
    /// A successful prompt refreshes the authentication time. Login state
    /// itself is not changed.
    pub async fn authenticate_with_biometrics<B: BiometricAuthenticator>(
        &mut self,
        biometrics: &B,
    ) -> bool {
        if self.last_auth.is_some_and(|at| self.is_fresh(at)) {
            return true;
        }

        match biometrics.authenticate(&BiometricPrompt::default()).await {
            Ok(true) => {
                self.stamp().await;
                true
            }
            Ok(false) => false,
            Err(e) => {
                error!(error = %e, "Biometric authentication failed");
                false
            }
        }
    }

    /// Turns biometric unlock on or off.
    ///
    /// # Errors
    ///
    /// Returns `BiometricUnsupported` when enabling on an unsupported device,
    /// or the storage error if the setting cannot be saved. The setting is
    /// unchanged on error.
    pub async fn toggle_biometric<B: BiometricAuthenticator>(
        &mut self,
        enabled: bool,
        biometrics: &B,
    ) -> Result<(), SessionError> {
        if enabled && !biometric_support(biometrics).await? {
            return Err(SessionError::BiometricUnsupported);
        }

        self.store
            .set(keys::BIOMETRIC_ENABLED, if enabled { "true" } else { "false" })
            .await?;
        self.biometric_enabled = enabled;
        info!(enabled, "Biometric unlock toggled");
        Ok(())
    }

    fn is_fresh(&self, at: DateTime<Utc>) -> bool {
        self.clock.now() - at < self.timeout
    }

    async fn stamp(&mut self) {
        let now = self.clock.now();
        self.last_auth = Some(now);
        if let Err(e) = self
            .store
            .set(keys::LAST_AUTH_TIME, &now.timestamp_millis().to_string())
            .await
        {
            error!(key = keys::LAST_AUTH_TIME, error = %e, "Failed to persist auth time");
        }
    }
}

async fn biometric_support<B: BiometricAuthenticator>(biometrics: &B) -> Result<bool, SessionError> {
    if !biometrics.has_hardware().await? {
        return Ok(false);
    }
    let enrolled = biometrics.is_enrolled().await?;
    let kinds = biometrics.supported_kinds().await?;
    Ok(enrolled && !kinds.is_empty())
}

fn parse_millis(raw: &str) -> Option<DateTime<Utc>> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
