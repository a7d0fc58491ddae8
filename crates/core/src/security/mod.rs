//! Device security.
//!
//! Root and jailbreak detection, an app tampering check, and screenshot
//! prevention that is re-applied whenever the app returns to the foreground.

mod error;
mod service;
mod types;

pub use error::SecurityError;
pub use service::SecurityService;
pub use types::{AppState, DeviceProbe, Platform, ScreenCaptureControl, SecurityPolicy};
