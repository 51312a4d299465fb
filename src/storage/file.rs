use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use super::{PlaylistStorage, StorageError};

/// Stores the blob as `<dir>/<key>.json`.
///
/// Saves go through a sibling `.tmp` file and a rename so a crashed write
/// never leaves a truncated collection behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    key: String,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{key}.json", key = self.key))
    }

    fn tmp_path(&self) -> PathBuf {
        self.dir.join(format!("{key}.json.tmp", key = self.key))
    }
}

#[async_trait]
impl PlaylistStorage for FileStorage {
    async fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match async_fs::read(self.path()).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), StorageError> {
        async_fs::create_dir_all(&self.dir).await?;

        let tmp = self.tmp_path();
        async_fs::write(&tmp, bytes).await?;
        async_fs::rename(&tmp, self.path()).await?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}
