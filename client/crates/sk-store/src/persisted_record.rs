use crate::Result as StorageResult;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Schema version written into every record envelope
pub const RECORD_VERSION: u32 = 0;

/// Envelope wrapping a store's state on disk:
/// `{"state": {...}, "version": 0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord<T> {
    pub state: T,
    pub version: u32,
}

impl<T> PersistedRecord<T> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            version: RECORD_VERSION,
        }
    }
}

impl<T: Serialize> PersistedRecord<T> {
    pub fn encode(&self) -> StorageResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> PersistedRecord<T> {
    /// Parses stored content.
    ///
    /// Malformed content and records from another schema version decode to
    /// `None` so callers fall back to their default state.
    pub fn decode(key: &str, raw: &str) -> Option<T> {
        match serde_json::from_str::<PersistedRecord<T>>(raw) {
            Ok(record) if record.version == RECORD_VERSION => Some(record.state),
            Ok(record) => {
                warn!(
                    "Ignoring record under '{key}' with schema v{} (expected v{RECORD_VERSION})",
                    record.version
                );
                None
            }
            Err(e) => {
                warn!("Ignoring malformed record under '{key}': {e}");
                None
            }
        }
    }
}
