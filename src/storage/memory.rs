use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{PlaylistStorage, StorageError};

/// In-process storage slot. Contents are lost with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Vec<u8>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an already persisted blob.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Mutex::new(Some(bytes.into())),
            read_only: false,
        }
    }

    /// Every save fails with [`StorageError::Rejected`], like a full quota.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub async fn contents(&self) -> Option<Vec<u8>> {
        self.slot.lock().await.clone()
    }
}

#[async_trait]
impl PlaylistStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Rejected("storage quota exceeded".to_string()));
        }

        *self.slot.lock().await = Some(bytes.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "in-memory".to_string()
    }
}
