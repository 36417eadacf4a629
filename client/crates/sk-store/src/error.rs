use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by persistence adapters.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable for key '{key}': {message} {location}")]
    Unavailable {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage I/O failed for key '{key}' at {path}: {source} {location}")]
    Io {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}': only [A-Za-z0-9_-] is allowed {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize record: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StorageError {
    /// Whether the backing storage itself could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Io { .. })
    }

    /// Creates Unavailable error at caller location.
    #[track_caller]
    pub fn unavailable(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Io error at caller location.
    #[track_caller]
    pub fn io(key: impl Into<String>, path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidKey error at caller location.
    #[track_caller]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
