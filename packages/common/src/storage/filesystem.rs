use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::error::StorageError;
use super::traits::{SlotFile, SlotStore};

/// Filesystem-backed single-slot store.
///
/// The slot lives in `base_path` as `{prefix}{extension}`. New content is staged
/// under `{base_path}/.tmp` and renamed into place before older slot files are
/// evicted, so a failed write never destroys the previous file. If several slot
/// files exist, the most recently modified one is current.
pub struct FilesystemSlotStore {
    base_path: PathBuf,
    prefix: String,
    max_size: u64,
    write_lock: Mutex<()>,
}

impl FilesystemSlotStore {
    /// Create a new slot store. Directories are created lazily on first write.
    pub fn new(base_path: impl Into<PathBuf>, prefix: impl Into<String>, max_size: u64) -> Self {
        Self {
            base_path: base_path.into(),
            prefix: prefix.into(),
            max_size,
            write_lock: Mutex::new(()),
        }
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }

    /// All regular files whose name starts with the slot prefix, newest first.
    ///
    /// Ties on modification time fall back to the path so the order is stable.
    async fn slot_entries(&self) -> Result<Vec<PathBuf>, StorageError> {
        let mut dir = match fs::read_dir(&self.base_path).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_name().to_string_lossy().starts_with(&self.prefix) {
                continue;
            }
            let metadata = entry.metadata().await?;
            if metadata.is_file() {
                entries.push((metadata.modified()?, entry.path()));
            }
        }
        entries.sort_by(|a, b| b.cmp(a));
        Ok(entries.into_iter().map(|(_, path)| path).collect())
    }
}

#[async_trait]
impl SlotStore for FilesystemSlotStore {
    async fn replace(&self, data: &[u8], extension: &str) -> Result<PathBuf, StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }

        let _guard = self.write_lock.lock().await;

        fs::create_dir_all(self.base_path.join(".tmp")).await?;

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        let target = self.base_path.join(format!("{}{}", self.prefix, extension));
        if let Err(e) = fs::rename(&temp_path, &target).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        for stale in self.slot_entries().await? {
            if stale == target {
                continue;
            }
            match fs::remove_file(&stale).await {
                Ok(()) => debug!(path = %stale.display(), "Evicted stale slot file"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                // The new file stays newest, so it is still the one served.
                Err(e) => warn!(path = %stale.display(), "Failed to evict stale slot file: {e}"),
            }
        }

        Ok(target)
    }

    async fn load(&self) -> Result<SlotFile, StorageError> {
        let path = self
            .current()
            .await?
            .ok_or_else(|| StorageError::NotFound(self.prefix.clone()))?;

        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.prefix.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(SlotFile { file_name, data })
    }

    async fn current(&self) -> Result<Option<PathBuf>, StorageError> {
        Ok(self.slot_entries().await?.into_iter().next())
    }
}
