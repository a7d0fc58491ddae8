//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
///
/// Every section has defaults, so an empty configuration is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// On-device storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Ledger configuration.
    #[serde(default)]
    pub ledger: LedgerSettings,
    /// Auth session configuration.
    #[serde(default)]
    pub session: SessionSettings,
    /// Device security configuration.
    #[serde(default)]
    pub security: SecuritySettings,
}

/// Which key-value backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// In-memory, lost on exit.
    #[default]
    Memory,
    /// Files under `root`.
    LocalFs,
}

/// On-device storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Backend selection.
    #[serde(default)]
    pub provider: StorageKind,
    /// Root directory for the `local_fs` backend.
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("./.pocketpay")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageKind::default(),
            root: default_storage_root(),
        }
    }
}

/// Ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    /// How many transactions the recent-history view shows.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    10
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

/// Auth session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Seconds an authentication stays valid.
    #[serde(default = "default_session_timeout")]
    pub timeout_secs: u64,
}

fn default_session_timeout() -> u64 {
    300 // 5 minutes
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_session_timeout(),
        }
    }
}

/// Device security configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SecuritySettings {
    /// How many times screenshot prevention is applied per request.
    #[serde(default = "default_screenshot_attempts")]
    pub screenshot_attempts: u32,
    /// Delay before retrying a failed prevention request.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Upper bound on prevention retries.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Whether this is a debug build; debug builds fail the tampering check.
    #[serde(default)]
    pub debug_build: bool,
}

fn default_screenshot_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_max_retries() -> u32 {
    3
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            screenshot_attempts: default_screenshot_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            max_retries: default_max_retries(),
            debug_build: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("POCKETPAY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
