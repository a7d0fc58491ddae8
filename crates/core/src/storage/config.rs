//! Storage configuration types.

use std::path::PathBuf;

use pocketpay_shared::config::{StorageKind, StorageSettings};
use serde::{Deserialize, Serialize};

/// Storage provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// Process memory; nothing survives a restart.
    Memory,
    /// Local filesystem, one file per key.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl StorageProvider {
    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::LocalFs { .. } => "local_fs",
        }
    }
}

impl From<&StorageSettings> for StorageProvider {
    fn from(settings: &StorageSettings) -> Self {
        match settings.provider {
            StorageKind::Memory => Self::Memory,
            StorageKind::LocalFs => Self::local_fs(settings.root.clone()),
        }
    }
}
