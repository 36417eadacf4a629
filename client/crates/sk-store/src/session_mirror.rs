use crate::persisted_cell::{Persist, PersistedCell, StoredState};
use crate::{PendingWrites, PersistenceAdapter};

use sk_core::{Identity, Result as CoreErrorResult, SessionState};

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Storage key of the session record. Changing it orphans persisted sessions.
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

/// On-disk shape of [`SessionState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub identity: Option<Identity>,
    pub is_authenticated: bool,
}

impl StoredState for SessionState {
    type Record = SessionRecord;

    fn to_record(&self) -> SessionRecord {
        SessionRecord {
            identity: self.identity().cloned(),
            is_authenticated: self.is_authenticated(),
        }
    }

    fn from_record(record: SessionRecord) -> Option<Self> {
        match (record.identity, record.is_authenticated) {
            (Some(identity), true) if identity.validate().is_ok() => {
                Some(SessionState::signed_in(identity))
            }
            (None, false) => Some(SessionState::signed_out()),
            _ => None,
        }
    }
}

/// Local cache of the authenticated identity.
///
/// Reads are synchronous and never touch storage. Every `set`/`clear`
/// schedules one background storage call.
pub struct SessionMirror {
    cell: PersistedCell<SessionState>,
}

impl SessionMirror {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self {
            cell: PersistedCell::new(SESSION_STORAGE_KEY, adapter),
        }
    }

    /// Caches `identity` as the signed-in user.
    ///
    /// Fails only when the identity has no id; state is then untouched.
    #[track_caller]
    pub fn set(&self, identity: Identity) -> CoreErrorResult<()> {
        identity.validate()?;

        info!("Session set for user {}", identity.id);
        self.cell.apply(SessionState::signed_in(identity), Persist::Store);
        Ok(())
    }

    /// Signs out locally. Safe to call when already signed out.
    pub fn clear(&self) {
        info!("Session cleared");
        self.cell.apply(SessionState::signed_out(), Persist::Remove);
    }

    pub fn get(&self) -> SessionState {
        self.cell.get()
    }

    /// Loads the persisted session once; later calls are no-ops.
    pub async fn hydrate(&self) -> bool {
        self.cell.hydrate().await
    }

    pub fn is_hydrated(&self) -> bool {
        self.cell.is_hydrated()
    }

    /// Receives every state transition after subscribing.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionState> {
        self.cell.subscribe()
    }

    /// Waits for all scheduled storage writes.
    pub async fn flush(&self) {
        self.cell.writes().flush().await
    }

    pub fn writes(&self) -> &PendingWrites {
        self.cell.writes()
    }

    pub fn storage_key(&self) -> &'static str {
        self.cell.key()
    }
}
