//! Storage error types.

use pocketpay_shared::AppError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Stored bytes are not valid UTF-8.
    #[error("value under '{key}' is not valid UTF-8")]
    InvalidEncoding {
        /// Key whose value could not be decoded.
        key: String,
    },

    /// Key is empty or would nest under a directory.
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// OpenDAL operation error.
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }

    /// Returns the error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "STORAGE_CONFIGURATION",
            Self::InvalidEncoding { .. } => "STORAGE_INVALID_ENCODING",
            Self::InvalidKey(_) => "STORAGE_INVALID_KEY",
            Self::Operation(_) => "STORAGE_OPERATION_FAILED",
        }
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        Self::Operation(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
