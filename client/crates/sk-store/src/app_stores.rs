use crate::{PersistenceAdapter, PreferenceStore, SessionMirror};

use std::sync::Arc;

use log::info;

/// The process-wide set of client stores, built once at startup and handed
/// to consumers explicitly.
#[derive(Clone)]
pub struct AppStores {
    session: Arc<SessionMirror>,
    preferences: Arc<PreferenceStore>,
}

impl AppStores {
    /// Both stores share one adapter but use independent keys.
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self {
            session: Arc::new(SessionMirror::new(Arc::clone(&adapter))),
            preferences: Arc::new(PreferenceStore::new(adapter)),
        }
    }

    pub async fn hydrate_all(&self) {
        let (session, preferences) =
            tokio::join!(self.session.hydrate(), self.preferences.hydrate());

        info!(
            "Stores hydrated (session restored: {session}, preference restored: {preferences})"
        );
    }

    /// Waits for pending writes of both stores, e.g. before shutdown.
    pub async fn flush_all(&self) {
        tokio::join!(self.session.flush(), self.preferences.flush());
    }

    pub fn session(&self) -> &Arc<SessionMirror> {
        &self.session
    }

    pub fn preferences(&self) -> &Arc<PreferenceStore> {
        &self.preferences
    }

    /// Storage writes that failed across both stores.
    pub fn failed_writes(&self) -> usize {
        self.session.writes().failed_count() + self.preferences.writes().failed_count()
    }
}
