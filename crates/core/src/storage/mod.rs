//! On-device key-value persistence using Apache OpenDAL.
//!
//! Everything the wallet keeps between launches is a string under one of the
//! [`keys`]. Stores elsewhere in this crate depend only on the
//! [`KeyValueStore`] trait; [`KvStore`] is the OpenDAL-backed implementation.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              KeyValueStore                    │
//! │   get(key)   │   set(key, value)  │ remove    │
//! ├──────────────────────────────────────────────┤
//! │   KvStore (OpenDAL)                           │
//! │   Memory    │   LocalFs { root }              │
//! └──────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;
#[cfg(test)]
pub(crate) mod testing;

pub use config::StorageProvider;
pub use error::StorageError;
pub use service::{KeyValueStore, KvStore};

/// Well-known storage keys.
pub mod keys {
    /// Wallet balance as a decimal string.
    pub const WALLET_BALANCE: &str = "walletBalance";
    /// Last successful authentication, epoch milliseconds.
    pub const LAST_AUTH_TIME: &str = "lastAuthTime";
    /// `"true"` when biometric unlock is enabled.
    pub const BIOMETRIC_ENABLED: &str = "biometricEnabled";
    /// Interface language code.
    pub const LANGUAGE: &str = "language";
    /// `"light"` or `"dark"`.
    pub const THEME: &str = "theme";
    /// JSON-encoded user profile.
    pub const USER_DATA: &str = "userData";
}
