use std::fmt;

use super::{
    CatalogManager,
    latency::{Latency, STORAGE_DELAY_MS},
};
use crate::{
    storage::{PlaylistStorage, StorageError},
    types::{Playlist, Song},
    utils,
};

pub const SEED_PLAYLIST_NAME: &str = "My Favorites";
pub const SEED_PLAYLIST_DESCRIPTION: &str = "A collection of my favorite tracks.";

#[derive(Debug)]
pub enum PlaylistError {
    ValidationError(String),
    SerdeError(serde_json::Error),
    PersistenceError(StorageError),
}

impl From<StorageError> for PlaylistError {
    fn from(err: StorageError) -> Self {
        PlaylistError::PersistenceError(err)
    }
}

impl From<serde_json::Error> for PlaylistError {
    fn from(err: serde_json::Error) -> Self {
        PlaylistError::SerdeError(err)
    }
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::ValidationError(msg) => write!(f, "invalid playlist: {}", msg),
            PlaylistError::SerdeError(e) => write!(f, "playlist data is malformed: {}", e),
            PlaylistError::PersistenceError(e) => write!(f, "cannot persist playlists: {}", e),
        }
    }
}

impl std::error::Error for PlaylistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaylistError::ValidationError(_) => None,
            PlaylistError::SerdeError(e) => Some(e),
            PlaylistError::PersistenceError(e) => Some(e),
        }
    }
}

/// CRUD over the user's playlists.
///
/// The manager keeps no copy of the collection. Each call loads the full
/// blob from storage, and each mutation writes the full blob back before
/// returning. Mutations are not serialized: two overlapping calls against
/// the same storage may lose one of the updates, so callers that mutate
/// concurrently have to queue their writes per playlist.
pub struct PlaylistManager {
    storage: Box<dyn PlaylistStorage>,
    latency: Latency,
}

impl PlaylistManager {
    pub fn new(storage: impl PlaylistStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            latency: Latency::None,
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn storage_location(&self) -> String {
        self.storage.location()
    }

    /// Loads every persisted playlist. A storage slot that was never
    /// written yields an empty list.
    pub async fn list_playlists(&self) -> Result<Vec<Playlist>, PlaylistError> {
        self.latency.pause(STORAGE_DELAY_MS).await;
        match self.storage.load().await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Option<Playlist>, PlaylistError> {
        let playlists = self.list_playlists().await?;
        Ok(playlists.into_iter().find(|p| p.id == playlist_id))
    }

    pub async fn create_playlist(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, PlaylistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlaylistError::ValidationError(
                "playlist name must not be empty".to_string(),
            ));
        }

        let mut playlists = self.list_playlists().await?;

        let mut id = utils::generate_playlist_id();
        while playlists.iter().any(|p| p.id == id) {
            id = utils::generate_playlist_id();
        }

        let playlist = Playlist {
            id,
            name: name.to_string(),
            song_ids: Vec::new(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        };

        playlists.push(playlist.clone());
        self.persist(&playlists).await?;
        Ok(playlist)
    }

    /// Appends `song_id` unless it is already a member. Adding a present
    /// song leaves storage untouched and returns the playlist as is.
    pub async fn add_song_to_playlist(
        &self,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<Option<Playlist>, PlaylistError> {
        let mut playlists = self.list_playlists().await?;
        let Some(playlist) = playlists.iter_mut().find(|p| p.id == playlist_id) else {
            return Ok(None);
        };

        if playlist.song_ids.iter().any(|id| id == song_id) {
            return Ok(Some(playlist.clone()));
        }

        playlist.song_ids.push(song_id.to_string());
        let updated = playlist.clone();
        self.persist(&playlists).await?;
        Ok(Some(updated))
    }

    pub async fn remove_song_from_playlist(
        &self,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<Option<Playlist>, PlaylistError> {
        let mut playlists = self.list_playlists().await?;
        let Some(playlist) = playlists.iter_mut().find(|p| p.id == playlist_id) else {
            return Ok(None);
        };

        let before = playlist.song_ids.len();
        playlist.song_ids.retain(|id| id != song_id);
        let updated = playlist.clone();

        if updated.song_ids.len() != before {
            self.persist(&playlists).await?;
        }
        Ok(Some(updated))
    }

    /// Unknown ids are ignored.
    pub async fn delete_playlist(&self, playlist_id: &str) -> Result<(), PlaylistError> {
        let mut playlists = self.list_playlists().await?;
        let before = playlists.len();
        playlists.retain(|p| p.id != playlist_id);

        if playlists.len() != before {
            self.persist(&playlists).await?;
        }
        Ok(())
    }

    /// Resolves the playlist's songs against `catalog` in playlist order.
    ///
    /// Ids the catalog no longer knows are skipped, and an unknown playlist
    /// yields no songs.
    pub async fn get_songs_from_playlist(
        &self,
        playlist_id: &str,
        catalog: &CatalogManager,
    ) -> Result<Vec<Song>, PlaylistError> {
        let Some(playlist) = self.get_playlist(playlist_id).await? else {
            return Ok(Vec::new());
        };

        let mut songs = Vec::with_capacity(playlist.song_ids.len());
        for song_id in &playlist.song_ids {
            if let Some(song) = catalog.get_song(song_id).await {
                songs.push(song);
            }
        }
        Ok(songs)
    }

    /// First-run bootstrap: when the storage slot was never written,
    /// creates the favorites playlist holding the first two catalog songs.
    /// A collection that was emptied by the user stays empty.
    pub async fn seed_first_run(
        &self,
        catalog: &CatalogManager,
    ) -> Result<Option<Playlist>, PlaylistError> {
        if self.storage.load().await?.is_some() {
            return Ok(None);
        }

        let mut seeded = self
            .create_playlist(SEED_PLAYLIST_NAME, Some(SEED_PLAYLIST_DESCRIPTION))
            .await?;

        for song in catalog.query_songs(None, None).await.iter().take(2) {
            if let Some(updated) = self.add_song_to_playlist(&seeded.id, &song.id).await? {
                seeded = updated;
            }
        }

        Ok(Some(seeded))
    }

    async fn persist(&self, playlists: &[Playlist]) -> Result<(), PlaylistError> {
        self.latency.pause(STORAGE_DELAY_MS).await;
        let json = serde_json::to_vec_pretty(playlists)?;
        self.storage.save(&json).await?;
        Ok(())
    }
}
