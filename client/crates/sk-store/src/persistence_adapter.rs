use crate::Result as StorageResult;

use async_trait::async_trait;

/// Asynchronous key-value storage supplied by the host platform.
///
/// Stores hold an `Arc<dyn PersistenceAdapter>` and call it from spawned
/// tasks, so implementations must be shareable across threads.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    async fn read(&self, key: &str) -> StorageResult<Option<String>>;

    async fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
