use tempfile::TempDir;
use tunecli::management::PlaylistManager;
use tunecli::storage::{FileStorage, MemoryStorage, PlaylistStorage, StorageError};

#[tokio::test]
async fn test_file_storage_missing_file_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path(), "playlists");

    assert!(storage.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_file_storage_save_and_load() {
    let dir = TempDir::new().unwrap();
    // nested directory is created on first save
    let storage = FileStorage::new(dir.path().join("nested/data"), "playlists");

    storage.save(b"[1,2,3]").await.unwrap();
    assert_eq!(storage.load().await.unwrap(), Some(b"[1,2,3]".to_vec()));
    assert!(storage.path().ends_with("nested/data/playlists.json"));

    // Saving again replaces the whole blob
    storage.save(b"[]").await.unwrap();
    assert_eq!(storage.load().await.unwrap(), Some(b"[]".to_vec()));

    // No temporary file is left behind
    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("nested/data"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_file_storage_keys_are_separate_slots() {
    let dir = TempDir::new().unwrap();
    let first = FileStorage::new(dir.path(), "first");
    let second = FileStorage::new(dir.path(), "second");

    first.save(b"one").await.unwrap();
    assert!(second.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_playlists_survive_a_new_manager() {
    let dir = TempDir::new().unwrap();

    let playlist = {
        let manager = PlaylistManager::new(FileStorage::new(dir.path(), "musicExplorerPlaylists"));
        let playlist = manager.create_playlist("Persistent", None).await.unwrap();
        manager
            .add_song_to_playlist(&playlist.id, "song3")
            .await
            .unwrap()
            .unwrap()
    };

    let manager = PlaylistManager::new(FileStorage::new(dir.path(), "musicExplorerPlaylists"));
    let stored = manager.get_playlist(&playlist.id).await.unwrap();
    assert_eq!(stored, Some(playlist));
}

#[tokio::test]
async fn test_memory_storage() {
    let storage = MemoryStorage::new();
    assert!(storage.load().await.unwrap().is_none());

    storage.save(b"blob").await.unwrap();
    assert_eq!(storage.load().await.unwrap(), Some(b"blob".to_vec()));
    assert_eq!(storage.contents().await, Some(b"blob".to_vec()));
    assert_eq!(storage.location(), "in-memory");
}

#[tokio::test]
async fn test_read_only_memory_storage_rejects_writes() {
    let storage = MemoryStorage::with_contents("[]").read_only();

    let result = storage.save(b"[1]").await;
    assert!(matches!(result, Err(StorageError::Rejected(_))));
    assert_eq!(storage.load().await.unwrap(), Some(b"[]".to_vec()));
}

#[test]
fn test_storage_error_display() {
    let err = StorageError::Rejected("storage quota exceeded".to_string());
    assert_eq!(
        err.to_string(),
        "storage rejected write: storage quota exceeded"
    );

    let err: StorageError = std::io::Error::new(std::io::ErrorKind::Other, "disk gone").into();
    assert!(err.to_string().contains("disk gone"));
}
