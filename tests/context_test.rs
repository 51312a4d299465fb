use tunecli::context::AppContext;
use tunecli::management::{Latency, SEED_PLAYLIST_NAME};
use tunecli::storage::MemoryStorage;

#[tokio::test]
async fn test_first_run_seeds_favorites() {
    let (ctx, seeded) = AppContext::with_storage(MemoryStorage::new(), Latency::None, true)
        .await
        .unwrap();

    let seeded = seeded.unwrap();
    assert_eq!(seeded.name, SEED_PLAYLIST_NAME);

    let songs = ctx
        .playlists
        .get_songs_from_playlist(&seeded.id, &ctx.catalog)
        .await
        .unwrap();
    let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Neon Interlude", "Starlight Serenade"]);
}

#[tokio::test]
async fn test_seeding_can_be_disabled() {
    let (ctx, seeded) = AppContext::with_storage(MemoryStorage::new(), Latency::None, false)
        .await
        .unwrap();

    assert!(seeded.is_none());
    assert!(ctx.playlists.list_playlists().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_existing_playlists_are_kept() {
    let stored = r#"[{"id":"p1","name":"Mine","songIds":["song5"]}]"#;
    let (ctx, seeded) =
        AppContext::with_storage(MemoryStorage::with_contents(stored), Latency::None, true)
            .await
            .unwrap();

    assert!(seeded.is_none());
    let playlists = ctx.playlists.list_playlists().await.unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].name, "Mine");
}

#[tokio::test]
async fn test_simulated_latency_still_answers() {
    let (ctx, _) = AppContext::with_storage(MemoryStorage::new(), Latency::Simulated, false)
        .await
        .unwrap();

    let songs = ctx.catalog.query_songs(None, Some("jazz")).await;
    assert_eq!(songs.len(), 3);
}
