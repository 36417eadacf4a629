use crate::{PersistenceAdapter, Result as StorageResult, StorageError};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

/// In-process storage binding.
///
/// Used by tests and by hosts that do not need durability. Availability can
/// be toggled to simulate a storage outage.
#[derive(Debug)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    available: AtomicBool,
    mutations: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
            mutations: AtomicUsize::new(0),
        }
    }

    /// When `false`, every operation fails with [`StorageError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Synchronous peek at a stored value.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    /// Stores a raw value synchronously, bypassing availability.
    pub fn seed(&self, key: &str, value: impl Into<String>) {
        self.entries().insert(key.to_string(), value.into());
    }

    /// Number of write and remove calls that reached the storage.
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[track_caller]
    fn ensure_available(&self, key: &str) -> StorageResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::unavailable(key, "memory storage marked unavailable"))
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistenceAdapter for MemoryStorage {
    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.ensure_available(key)?;
        Ok(self.snapshot(key))
    }

    async fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.ensure_available(key)?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.ensure_available(key)?;
        self.entries().remove(key);
        Ok(())
    }
}
