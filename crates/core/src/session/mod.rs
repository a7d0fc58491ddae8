//! Auth session state.
//!
//! Tracks whether the user is logged in, when they last authenticated and
//! whether biometric unlock is on. Storage, clock and biometric hardware are
//! injected so the session can be driven from tests.

mod auth;
mod biometric;
mod clock;
mod error;

pub use auth::{AuthSession, DEFAULT_SESSION_TIMEOUT_SECS, session_timeout};
pub use biometric::{BiometricAuthenticator, BiometricKind, BiometricPrompt};
pub use clock::{Clock, SystemClock};
pub use error::SessionError;
