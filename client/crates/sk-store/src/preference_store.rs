use crate::persisted_cell::{Persist, PersistedCell, StoredState};
use crate::{PendingWrites, PersistenceAdapter};

use sk_core::{ColorScheme, Preference, Result as CoreErrorResult};

use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Storage key of the preference record.
pub const PREFERENCE_STORAGE_KEY: &str = "theme-storage";

/// On-disk shape of the display-mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub theme: Preference,
}

impl StoredState for Preference {
    type Record = PreferenceRecord;

    fn to_record(&self) -> PreferenceRecord {
        PreferenceRecord { theme: *self }
    }

    fn from_record(record: PreferenceRecord) -> Option<Self> {
        Some(record.theme)
    }
}

/// Local cache of the display-mode preference, `system` until set.
pub struct PreferenceStore {
    cell: PersistedCell<Preference>,
}

impl PreferenceStore {
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self {
            cell: PersistedCell::new(PREFERENCE_STORAGE_KEY, adapter),
        }
    }

    pub fn set_preference(&self, preference: Preference) {
        info!("Theme preference set to {preference}");
        self.cell.apply(preference, Persist::Store);
    }

    /// Parses and applies a raw value such as `"dark"`.
    ///
    /// Unknown values fail with `InvalidPreference` and leave the current
    /// preference in place.
    #[track_caller]
    pub fn set_preference_str(&self, value: &str) -> CoreErrorResult<()> {
        let preference = value.parse::<Preference>()?;
        self.set_preference(preference);
        Ok(())
    }

    pub fn get_preference(&self) -> Preference {
        self.cell.get()
    }

    pub fn color_scheme(&self, device_is_dark: bool) -> ColorScheme {
        self.get_preference().resolve(device_is_dark)
    }

    pub async fn hydrate(&self) -> bool {
        self.cell.hydrate().await
    }

    pub fn is_hydrated(&self) -> bool {
        self.cell.is_hydrated()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Preference> {
        self.cell.subscribe()
    }

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
