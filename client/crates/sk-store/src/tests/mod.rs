
use crate::{MemoryStorage, PersistenceAdapter, Result as StorageResult};

use sk_core::Identity;

use async_trait::async_trait;
use tokio::sync::Semaphore;

pub(crate) fn ann() -> Identity {
    Identity::new("1", "Ann", "ann@x.com")
}

pub(crate) fn bob() -> Identity {
    Identity::new("2", "Bob", "bob@x.com")
}

/// Memory storage whose reads block until [`GatedStorage::open`] is called.
pub(crate) struct GatedStorage {
    pub(crate) inner: MemoryStorage,
    gate: Semaphore,
}

impl GatedStorage {
    pub(crate) fn new() -> Self {
        Self {
            inner: MemoryStorage::new(),
            gate: Semaphore::new(0),
        }
    }

    pub(crate) fn open(&self) {
        self.gate.add_permits(Semaphore::MAX_PERMITS / 2);
    }
}

#[async_trait]
impl PersistenceAdapter for GatedStorage {
    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let _permit = self.gate.acquire().await.unwrap();
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.write(key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key).await
    }
}
