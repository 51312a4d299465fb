//! # Playlist Persistence Backends
//!
//! The playlist collection is persisted as one opaque blob under a fixed
//! storage key. [`PlaylistStorage`] is the whole contract a backend has to
//! fulfil: hand back the last saved bytes (or nothing on a first run) and
//! replace them wholesale on save. There is no per-record access; the
//! [`crate::management::PlaylistManager`] always reads, modifies and writes
//! the complete collection.
//!
//! ## Backends
//!
//! - [`FileStorage`] - one `<key>.json` file in the local data directory
//! - [`MemoryStorage`] - in-process slot, used by tests and ephemeral runs
//!
//! Backends do not serialize concurrent writers. Two overlapping
//! read-modify-write cycles against the same backend can lose an update;
//! callers that issue mutations concurrently must queue them themselves.

mod file;
mod memory;

use std::{fmt, io::Error, sync::Arc};

use async_trait::async_trait;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug)]
pub enum StorageError {
    IoError(Error),
    /// The backend refused the write, e.g. quota exceeded or read-only slot.
    Rejected(String),
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::IoError(err)
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "storage I/O failed: {}", e),
            StorageError::Rejected(reason) => write!(f, "storage rejected write: {}", reason),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            StorageError::Rejected(_) => None,
        }
    }
}

/// Key-value slot holding the serialized playlist collection.
#[async_trait]
pub trait PlaylistStorage: Send + Sync {
    /// Returns the persisted bytes, or `None` if nothing was ever saved.
    async fn load(&self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replaces the persisted bytes.
    async fn save(&self, bytes: &[u8]) -> Result<(), StorageError>;

    /// Human readable location, shown by `tunecli info`.
    fn location(&self) -> String;
}

#[async_trait]
impl<T: PlaylistStorage + ?Sized> PlaylistStorage for Arc<T> {
    async fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load().await
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).save(bytes).await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
