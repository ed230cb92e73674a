use std::path::PathBuf;

use async_trait::async_trait;

use super::error::StorageError;

/// Contents of the file currently occupying a slot.
#[derive(Debug, Clone)]
pub struct SlotFile {
    /// File name on disk, e.g. `avatar.png`.
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Storage holding at most one file under a fixed name prefix.
///
/// Writing a new file replaces whatever occupied the slot before, even when the
/// extension differs.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Store `data` as `<prefix><extension>` and evict every other file in the slot.
    ///
    /// `extension` includes the leading dot. Returns the path of the stored file.
    async fn replace(&self, data: &[u8], extension: &str) -> Result<PathBuf, StorageError>;

    /// Read back the file occupying the slot.
    async fn load(&self) -> Result<SlotFile, StorageError>;

    /// Path of the file occupying the slot, if any.
    async fn current(&self) -> Result<Option<PathBuf>, StorageError>;
}
