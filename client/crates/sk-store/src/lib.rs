//! Persisted client-side state containers.
//!
//! [`SessionMirror`] caches the signed-in identity and [`PreferenceStore`]
//! caches the display-mode preference. Both apply mutations in memory
//! immediately and write through to a host-supplied [`PersistenceAdapter`]
//! in the background.

mod app_stores;
mod error;
mod file_storage;
mod memory_storage;
mod pending_writes;
mod persisted_cell;
mod persisted_record;
mod persistence_adapter;
mod preference_store;
mod session_mirror;

#[cfg(test)]
mod tests;

pub use app_stores::AppStores;
pub use error::{Result, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use pending_writes::PendingWrites;
pub use persisted_cell::StoredState;
pub use persisted_record::{PersistedRecord, RECORD_VERSION};
pub use persistence_adapter::PersistenceAdapter;
pub use preference_store::{PREFERENCE_STORAGE_KEY, PreferenceRecord, PreferenceStore};
pub use session_mirror::{SESSION_STORAGE_KEY, SessionMirror, SessionRecord};

/// Capacity of each store's change-notification channel
const NOTIFY_CHANNEL_CAPACITY: usize = 16;
