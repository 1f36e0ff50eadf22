//! Store error types.

use std::path::PathBuf;

use fxdesk_shared::AppError;
use thiserror::Error;

/// Preference storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the file failed.
    #[error("cannot access preference file {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a JSON object of strings.
    #[error("preference file {} is corrupt: {source}", path.display())]
    Corrupt {
        /// File being read.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the preferences failed.
    #[error("cannot encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a corrupt-file error for a path.
    #[must_use]
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}
