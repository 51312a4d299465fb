use tabled::Table;

use crate::{
    context::AppContext, error, info, success, types::PlaylistTableRow, utils, warning,
};

pub async fn list_playlists(ctx: &AppContext) {
    let playlists = match ctx.playlists.list_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    };

    if playlists.is_empty() {
        info!("No playlists yet. Create one with tunecli playlist create <NAME>.");
        return;
    }

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            id: p.id,
            name: p.name,
            songs: p.song_ids.len(),
            description: p.description.unwrap_or_default(),
        })
        .collect();

    println!("{}", Table::new(table_rows));
}

pub async fn show_playlist(ctx: &AppContext, playlist_id: String) {
    let playlist = match ctx.playlists.get_playlist(&playlist_id).await {
        Ok(Some(playlist)) => playlist,
        Ok(None) => {
            warning!("Playlist {} not found", playlist_id);
            return;
        }
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    };

    let songs = match ctx
        .playlists
        .get_songs_from_playlist(&playlist.id, &ctx.catalog)
        .await
    {
        Ok(songs) => songs,
        Err(e) => error!("Failed to load playlist songs. Err: {}", e),
    };

    info!("{}", playlist.name);
    if let Some(description) = &playlist.description {
        info!("{}", description);
    }

    let missing = playlist.song_ids.len().saturating_sub(songs.len());
    if missing > 0 {
        warning!(
            "Playlist {} references {} songs that are no longer in the catalog",
            playlist.id,
            missing
        );
    }

    if songs.is_empty() {
        info!("This playlist is empty.");
        return;
    }

    let total: u32 = songs.iter().map(|s| s.duration_seconds).sum();
    println!("{}", Table::new(super::search::song_rows(ctx, &songs)));
    info!(
        "{} songs, {}",
        songs.len(),
        utils::format_duration(total)
    );
}

pub async fn create_playlist(ctx: &AppContext, name: String, description: Option<String>) {
    match ctx
        .playlists
        .create_playlist(&name, description.as_deref())
        .await
    {
        Ok(playlist) => success!("Playlist {} created with id {}", playlist.name, playlist.id),
        Err(e) => error!("Cannot create playlist. Err: {}", e),
    }
}

pub async fn add_song(ctx: &AppContext, playlist_id: String, song_id: String) {
    let Some(song) = ctx.catalog.get_song(&song_id).await else {
        error!("Song {} is not in the catalog", song_id);
    };

    let before = match ctx.playlists.get_playlist(&playlist_id).await {
        Ok(Some(playlist)) => playlist,
        Ok(None) => {
            warning!("Playlist {} not found", playlist_id);
            return;
        }
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    };

    if before.song_ids.contains(&song.id) {
        info!("{} is already in {}", song.title, before.name);
        return;
    }

    match ctx.playlists.add_song_to_playlist(&playlist_id, &song.id).await {
        Ok(Some(playlist)) => success!("Added {} to {}", song.title, playlist.name),
        Ok(None) => warning!("Playlist {} not found", playlist_id),
        Err(e) => error!("Cannot add song. Err: {}", e),
    }
}

pub async fn remove_song(ctx: &AppContext, playlist_id: String, song_id: String) {
    let before = match ctx.playlists.get_playlist(&playlist_id).await {
        Ok(Some(playlist)) => playlist,
        Ok(None) => {
            warning!("Playlist {} not found", playlist_id);
            return;
        }
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    };

    if !before.song_ids.contains(&song_id) {
        info!("{} is not part of {}", song_id, before.name);
        return;
    }

    match ctx
        .playlists
        .remove_song_from_playlist(&playlist_id, &song_id)
        .await
    {
        Ok(Some(playlist)) => success!("Removed {} from {}", song_id, playlist.name),
        Ok(None) => warning!("Playlist {} not found", playlist_id),
        Err(e) => error!("Cannot remove song. Err: {}", e),
    }
}

pub async fn delete_playlist(ctx: &AppContext, playlist_id: String) {
    match ctx.playlists.delete_playlist(&playlist_id).await {
        Ok(()) => success!("Playlist {} deleted", playlist_id),
        Err(e) => error!("Cannot delete playlist. Err: {}", e),
    }
}
