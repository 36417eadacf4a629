use crate::{PersistenceAdapter, Result as StorageResult, StorageError};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::debug;
use tokio::fs;
use tokio::io::AsyncWriteExt;

const FILE_EXTENSION: &str = "json";

/// Distinguishes temp files of concurrent writes to the same key
static TEMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Local-file storage binding: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::io("<root>", dir.clone(), e))?;

        debug!("File storage opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(StorageError::invalid_key(key));
        }

        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

#[async_trait]
impl PersistenceAdapter for FileStorage {
    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, path, e)),
        }
    }

    /// Writes via temp file, fsync and atomic rename so a crash mid-write
    /// never leaves a truncated record behind.
    async fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;
        let sequence = TEMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let temp_path = self.dir.join(format!(
            "{key}.{FILE_EXTENSION}.tmp.{}.{sequence}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StorageError::io(key, temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StorageError::io(key, temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StorageError::io(key, temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(key, final_path, e));
        }

        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(key, path, e)),
        }
    }
}
