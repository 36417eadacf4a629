use crate::PersistenceAdapter;

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, warn};
use tokio::runtime::Handle;
use tokio::sync::Mutex as AsyncMutex;
use tokio::task::JoinHandle;

/// A storage mutation scheduled after an in-memory state change
#[derive(Debug)]
pub(crate) enum WriteOp {
    Write(String),
    Remove,
}

/// Tracks fire-and-forget persistence tasks so they can be awaited.
///
/// Failures are logged and counted, never returned: the in-memory state that
/// triggered the write stays applied.
///
/// Each write carries the sequence number of the mutation that produced it.
/// A write that runs after a newer one has already landed is dropped, so
/// storage converges on the latest in-memory state even when tasks finish
/// out of order.
#[derive(Debug, Default)]
pub struct PendingWrites {
    handles: Mutex<Vec<JoinHandle<()>>>,
    sequence: AtomicU64,
    landed: Arc<AsyncMutex<u64>>,
    failed: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
    superseded: Arc<AtomicUsize>,
}

impl PendingWrites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the sequence number for the next mutation. Must be taken
    /// while the state lock is held so numbers follow mutation order.
    pub(crate) fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Spawns `op` on the current tokio runtime and returns immediately.
    ///
    /// Outside a runtime nothing is spawned and the write counts as failed.
    pub(crate) fn schedule(
        &self,
        adapter: Arc<dyn PersistenceAdapter>,
        key: &'static str,
        sequence: u64,
        op: WriteOp,
    ) {
        let Ok(runtime) = Handle::try_current() else {
            warn!("No tokio runtime to persist '{key}', in-memory state kept");
            self.record_failure();
            return;
        };

        let landed = Arc::clone(&self.landed);
        let failed = Arc::clone(&self.failed);
        let completed = Arc::clone(&self.completed);
        let superseded = Arc::clone(&self.superseded);

        let handle = runtime.spawn(async move {
            let mut landed = landed.lock().await;
            if *landed > sequence {
                superseded.fetch_add(1, Ordering::SeqCst);
                debug!("Dropping stale write #{sequence} for '{key}'");
                return;
            }
            *landed = sequence;

            let (action, result) = match &op {
                WriteOp::Write(raw) => ("write", adapter.write(key, raw).await),
                WriteOp::Remove => ("remove", adapter.remove(key).await),
            };

            match result {
                Ok(()) => {
                    completed.fetch_add(1, Ordering::SeqCst);
                    debug!("Persisted {action} for '{key}'");
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::SeqCst);
                    warn!("Persisted {action} for '{key}' failed, in-memory state kept: {e}");
                }
            }
        });

        let mut handles = self.handles();
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Counts a write that never reached the adapter.
    pub(crate) fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    /// Waits until every write scheduled so far, and any scheduled while
    /// waiting, has finished.
    pub async fn flush(&self) {
        loop {
            let batch = std::mem::take(&mut *self.handles());
            if batch.is_empty() {
                break;
            }

            for handle in batch {
                if let Err(e) = handle.await {
                    error!("Persistence task did not complete: {e}");
                }
            }
        }
    }

    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Writes dropped because a newer mutation reached storage first.
    pub fn superseded_count(&self) -> usize {
        self.superseded.load(Ordering::SeqCst)
    }

    /// Writes spawned but not yet finished.
    pub fn pending_count(&self) -> usize {
        self.handles().iter().filter(|h| !h.is_finished()).count()
    }

    fn handles(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
