use crate::pending_writes::WriteOp;
use crate::{NOTIFY_CHANNEL_CAPACITY, PendingWrites, PersistedRecord, PersistenceAdapter};

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{OnceCell, broadcast};

/// State that can be held by a persisted store.
pub trait StoredState: Clone + Default + Send + Sync + 'static {
    /// Shape written inside the record envelope
    type Record: Serialize + DeserializeOwned;

    fn to_record(&self) -> Self::Record;

    /// `None` when the record parsed but breaks the state's invariants.
    fn from_record(record: Self::Record) -> Option<Self>;
}

/// What to do with storage after a state change
pub(crate) enum Persist {
    Store,
    Remove,
}

struct Versioned<T> {
    value: T,
    /// Bumped on every transition; hydration only applies while still 0
    revision: u64,
}

/// In-memory value with write-through persistence under one storage key.
pub(crate) struct PersistedCell<T: StoredState> {
    key: &'static str,
    adapter: Arc<dyn PersistenceAdapter>,
    current: RwLock<Versioned<T>>,
    hydration: OnceCell<bool>,
    writes: PendingWrites,
    notifier: broadcast::Sender<T>,
}

impl<T: StoredState> PersistedCell<T> {
    pub(crate) fn new(key: &'static str, adapter: Arc<dyn PersistenceAdapter>) -> Self {
        let (notifier, _) = broadcast::channel(NOTIFY_CHANNEL_CAPACITY);

        Self {
            key,
            adapter,
            current: RwLock::new(Versioned {
                value: T::default(),
                revision: 0,
            }),
            hydration: OnceCell::new(),
            writes: PendingWrites::new(),
            notifier,
        }
    }

    pub(crate) fn key(&self) -> &'static str {
        self.key
    }

    pub(crate) fn get(&self) -> T {
        self.read().value.clone()
    }

    /// Swaps in `next`, notifies subscribers, then schedules one storage
    /// mutation. Never blocks on storage.
    pub(crate) fn apply(&self, next: T, persist: Persist) {
        let op = match persist {
            Persist::Store => match PersistedRecord::new(next.to_record()).encode() {
                Ok(raw) => Some(WriteOp::Write(raw)),
                Err(e) => {
                    warn!("Could not encode '{}', skipping write: {e}", self.key);
                    self.writes.record_failure();
                    None
                }
            },
            Persist::Remove => Some(WriteOp::Remove),
        };

        let sequence = {
            let mut current = self.write();
            current.value = next.clone();
            current.revision += 1;
            self.writes.next_sequence()
        };

        let _ = self.notifier.send(next);

        if let Some(op) = op {
            self.writes.schedule(Arc::clone(&self.adapter), self.key, sequence, op);
        }
    }

    /// Loads persisted state once per cell. Returns whether a persisted value
    /// was applied.
    ///
    /// A local mutation made before hydration finishes wins over storage.
    pub(crate) async fn hydrate(&self) -> bool {
        *self
            .hydration
            .get_or_init(|| self.load_persisted())
            .await
    }

    pub(crate) fn is_hydrated(&self) -> bool {
        self.hydration.initialized()
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<T> {
        self.notifier.subscribe()
    }

    pub(crate) fn writes(&self) -> &PendingWrites {
        &self.writes
    }

    async fn load_persisted(&self) -> bool {
        let raw = match self.adapter.read(self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Nothing persisted under '{}', keeping default", self.key);
                return false;
            }
            Err(e) => {
                warn!("Hydration of '{}' failed, keeping default: {e}", self.key);
                return false;
            }
        };

        let Some(record) = PersistedRecord::<T::Record>::decode(self.key, &raw) else {
            return false;
        };

        let Some(value) = T::from_record(record) else {
            warn!(
                "Persisted state under '{}' is inconsistent, keeping default",
                self.key
            );
            return false;
        };

        {
            let mut current = self.write();
            if current.revision != 0 {
                debug!(
                    "Discarding persisted '{}': state was set before hydration finished",
                    self.key
                );
                return false;
            }
            current.value = value.clone();
            current.revision += 1;
        }

        let _ = self.notifier.send(value);
        info!("Hydrated '{}' from storage", self.key);
        true
    }

    fn read(&self) -> RwLockReadGuard<'_, Versioned<T>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Versioned<T>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}
