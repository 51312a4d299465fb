use std::sync::Arc;

use tunecli::management::{
    CatalogManager, PlaylistError, PlaylistManager, SEED_PLAYLIST_DESCRIPTION, SEED_PLAYLIST_NAME,
};
use tunecli::storage::{MemoryStorage, StorageError};
use tunecli::types::Playlist;

// Helper function to create a manager over a fresh in-memory slot
fn create_test_manager() -> PlaylistManager {
    PlaylistManager::new(MemoryStorage::new())
}

fn builtin() -> CatalogManager {
    CatalogManager::builtin().expect("built-in catalog is consistent")
}

#[tokio::test]
async fn test_list_playlists_first_run_is_empty() {
    let manager = create_test_manager();
    assert!(manager.list_playlists().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_playlist() {
    let manager = create_test_manager();

    let playlist = manager
        .create_playlist("Road Trip", Some("Songs for the highway"))
        .await
        .unwrap();

    assert!(playlist.id.starts_with("playlist_"));
    assert_eq!(playlist.name, "Road Trip");
    assert!(playlist.song_ids.is_empty());
    assert_eq!(playlist.description.as_deref(), Some("Songs for the highway"));

    // Should be persisted
    let stored = manager.list_playlists().await.unwrap();
    assert_eq!(stored, vec![playlist]);
}

#[tokio::test]
async fn test_create_playlist_trims_name_and_drops_blank_description() {
    let manager = create_test_manager();

    let playlist = manager.create_playlist("  Focus  ", Some("   ")).await.unwrap();
    assert_eq!(playlist.name, "Focus");
    assert_eq!(playlist.description, None);
}

#[tokio::test]
async fn test_create_playlist_rejects_blank_name() {
    let manager = create_test_manager();

    for name in ["", "   ", "\t\n"] {
        let result = manager.create_playlist(name, None).await;
        assert!(matches!(result, Err(PlaylistError::ValidationError(_))));
    }

    // Nothing should have been written
    assert!(manager.list_playlists().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_playlist_ids_are_unique() {
    let manager = create_test_manager();

    let first = manager.create_playlist("One", None).await.unwrap();
    let second = manager.create_playlist("Two", None).await.unwrap();
    let third = manager.create_playlist("One", None).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.id, third.id);
    assert_ne!(second.id, third.id);
    assert_eq!(manager.list_playlists().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_add_song_is_idempotent() {
    let manager = create_test_manager();
    let playlist = manager.create_playlist("Mix", None).await.unwrap();

    let once = manager
        .add_song_to_playlist(&playlist.id, "song1")
        .await
        .unwrap()
        .unwrap();
    let twice = manager
        .add_song_to_playlist(&playlist.id, "song1")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(once.song_ids, vec!["song1"]);
    assert_eq!(twice.song_ids, vec!["song1"]);

    let stored = manager.get_playlist(&playlist.id).await.unwrap().unwrap();
    assert_eq!(stored.song_ids, vec!["song1"]);
}

#[tokio::test]
async fn test_add_song_preserves_insertion_order() {
    let manager = create_test_manager();
    let playlist = manager.create_playlist("Mix", None).await.unwrap();

    for song_id in ["song3", "song1", "song5"] {
        manager
            .add_song_to_playlist(&playlist.id, song_id)
            .await
            .unwrap();
    }

    let stored = manager.get_playlist(&playlist.id).await.unwrap().unwrap();
    assert_eq!(stored.song_ids, vec!["song3", "song1", "song5"]);
}

#[tokio::test]
async fn test_add_song_to_unknown_playlist() {
    let manager = create_test_manager();
    manager.create_playlist("Mix", None).await.unwrap();

    let result = manager
        .add_song_to_playlist("playlist_missing", "song1")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_remove_song() {
    let manager = create_test_manager();
    let playlist = manager.create_playlist("Mix", None).await.unwrap();
    manager.add_song_to_playlist(&playlist.id, "song1").await.unwrap();
    manager.add_song_to_playlist(&playlist.id, "song2").await.unwrap();

    let updated = manager
        .remove_song_from_playlist(&playlist.id, "song1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.song_ids, vec!["song2"]);

    let stored = manager.get_playlist(&playlist.id).await.unwrap().unwrap();
    assert_eq!(stored.song_ids, vec!["song2"]);
}

#[tokio::test]
async fn test_remove_song_never_added_is_noop() {
    let manager = create_test_manager();
    let playlist = manager.create_playlist("Mix", None).await.unwrap();
    manager.add_song_to_playlist(&playlist.id, "song1").await.unwrap();
    let before = manager.list_playlists().await.unwrap();

    let result = manager
        .remove_song_from_playlist(&playlist.id, "song4")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.song_ids, vec!["song1"]);
    assert_eq!(manager.list_playlists().await.unwrap(), before);
}

#[tokio::test]
async fn test_remove_song_drops_every_occurrence() {
    // stored data is trusted, even when it carries duplicates
    let stored = r#"[{"id":"p1","name":"Dupes","songIds":["song1","song2","song1"]}]"#;
    let manager = PlaylistManager::new(MemoryStorage::with_contents(stored));

    let updated = manager
        .remove_song_from_playlist("p1", "song1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.song_ids, vec!["song2"]);
}

#[tokio::test]
async fn test_remove_song_from_unknown_playlist() {
    let manager = create_test_manager();
    let result = manager
        .remove_song_from_playlist("nope", "song1")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_playlist() {
    let manager = create_test_manager();
    let keep = manager.create_playlist("Keep", None).await.unwrap();
    let drop = manager.create_playlist("Drop", None).await.unwrap();

    manager.delete_playlist(&drop.id).await.unwrap();

    assert_eq!(manager.list_playlists().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn test_delete_unknown_playlist_leaves_collection_alone() {
    let storage_contents = r#"[{"id":"p1","name":"Only","songIds":[]}]"#;
    let manager = PlaylistManager::new(MemoryStorage::with_contents(storage_contents));
    let before = manager.list_playlists().await.unwrap();

    manager.delete_playlist("p404").await.unwrap();

    assert_eq!(manager.list_playlists().await.unwrap(), before);
}

#[tokio::test]
async fn test_get_songs_from_playlist_round_trip() {
    let catalog = builtin();
    let manager = create_test_manager();

    let playlist = manager.create_playlist("X", None).await.unwrap();
    manager.add_song_to_playlist(&playlist.id, "song1").await.unwrap();

    let songs = manager
        .get_songs_from_playlist(&playlist.id, &catalog)
        .await
        .unwrap();
    assert_eq!(songs, vec![catalog.get_song("song1").await.unwrap()]);
}

#[tokio::test]
async fn test_get_songs_from_playlist_skips_stale_ids() {
    let catalog = builtin();
    let manager = create_test_manager();

    let playlist = manager.create_playlist("Drift", None).await.unwrap();
    for song_id in ["song5", "song_removed", "song2"] {
        manager.add_song_to_playlist(&playlist.id, song_id).await.unwrap();
    }

    let songs = manager
        .get_songs_from_playlist(&playlist.id, &catalog)
        .await
        .unwrap();
    let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["song5", "song2"]);
}

#[tokio::test]
async fn test_get_songs_from_unknown_playlist() {
    let catalog = builtin();
    let manager = create_test_manager();

    let songs = manager
        .get_songs_from_playlist("missing", &catalog)
        .await
        .unwrap();
    assert!(songs.is_empty());
}

#[tokio::test]
async fn test_persisted_blob_format() {
    let storage = Arc::new(MemoryStorage::new());
    let manager = PlaylistManager::new(Arc::clone(&storage));

    let playlist = manager.create_playlist("Blob", None).await.unwrap();
    manager.add_song_to_playlist(&playlist.id, "song2").await.unwrap();

    let bytes = storage.contents().await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // array of objects with camelCase keys, description omitted when absent
    let entry = &json.as_array().unwrap()[0];
    assert_eq!(entry["id"], playlist.id.as_str());
    assert_eq!(entry["name"], "Blob");
    assert_eq!(entry["songIds"], serde_json::json!(["song2"]));
    assert!(entry.get("description").is_none());
}

#[tokio::test]
async fn test_persistence_error_is_surfaced() {
    let stored = r#"[{"id":"p1","name":"Locked","songIds":[]}]"#;
    let manager = PlaylistManager::new(MemoryStorage::with_contents(stored).read_only());

    let result = manager.create_playlist("New", None).await;
    assert!(matches!(
        result,
        Err(PlaylistError::PersistenceError(StorageError::Rejected(_)))
    ));

    let result = manager.add_song_to_playlist("p1", "song1").await;
    assert!(matches!(result, Err(PlaylistError::PersistenceError(_))));

    // prior state is unchanged
    let playlists = manager.list_playlists().await.unwrap();
    assert_eq!(playlists.len(), 1);
    assert!(playlists[0].song_ids.is_empty());
}

#[tokio::test]
async fn test_malformed_blob_is_reported() {
    let manager = PlaylistManager::new(MemoryStorage::with_contents("not json"));

    let result = manager.list_playlists().await;
    assert!(matches!(result, Err(PlaylistError::SerdeError(_))));
}

#[tokio::test]
async fn test_seed_first_run() {
    let catalog = builtin();
    let manager = create_test_manager();

    let seeded = manager.seed_first_run(&catalog).await.unwrap().unwrap();
    assert_eq!(seeded.name, SEED_PLAYLIST_NAME);
    assert_eq!(seeded.description.as_deref(), Some(SEED_PLAYLIST_DESCRIPTION));
    assert_eq!(seeded.song_ids, vec!["song1", "song2"]);

    // Only the very first run seeds
    assert!(manager.seed_first_run(&catalog).await.unwrap().is_none());
    assert_eq!(manager.list_playlists().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_seed_skipped_after_user_emptied_collection() {
    let catalog = builtin();
    let manager = PlaylistManager::new(MemoryStorage::with_contents("[]"));

    assert!(manager.seed_first_run(&catalog).await.unwrap().is_none());
    assert!(manager.list_playlists().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_playlist_deserializes_without_description() {
    let playlist: Playlist =
        serde_json::from_str(r#"{"id":"p1","name":"N","songIds":["a","b"]}"#).unwrap();
    assert_eq!(playlist.description, None);
    assert_eq!(playlist.song_ids, vec!["a", "b"]);
}
