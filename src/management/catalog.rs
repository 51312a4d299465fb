use std::{collections::HashSet, fmt};

use super::latency::{LIST_DELAY_MS, LOOKUP_DELAY_MS, Latency, QUERY_DELAY_MS};
use crate::{
    catalog,
    types::{Album, Artist, FilterCriteria, Song},
};

#[derive(Debug)]
pub enum CatalogError {
    DuplicateId(String),
    IntegrityError(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "duplicate catalog id '{}'", id),
            CatalogError::IntegrityError(msg) => write!(f, "catalog integrity violated: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only access to the artist, album and song reference data.
pub struct CatalogManager {
    artists: Vec<Artist>,
    albums: Vec<Album>,
    songs: Vec<Song>,
    latency: Latency,
}

impl CatalogManager {
    /// Builds a snapshot, checking that ids are unique per entity kind and
    /// that every album and song reference resolves.
    pub fn new(
        artists: Vec<Artist>,
        albums: Vec<Album>,
        songs: Vec<Song>,
    ) -> Result<Self, CatalogError> {
        let artist_ids = unique_ids(artists.iter().map(|a| a.id.as_str()))?;
        let album_ids = unique_ids(albums.iter().map(|a| a.id.as_str()))?;
        unique_ids(songs.iter().map(|s| s.id.as_str()))?;

        for album in &albums {
            let unknown = album.artist_ids.iter().find(|id| !artist_ids.contains(id.as_str()));
            if let Some(missing) = unknown {
                return Err(CatalogError::IntegrityError(format!(
                    "album '{}' credits unknown artist '{}'",
                    album.id, missing
                )));
            }
        }

        for song in &songs {
            if !album_ids.contains(song.album_id.as_str()) {
                return Err(CatalogError::IntegrityError(format!(
                    "song '{}' references unknown album '{}'",
                    song.id, song.album_id
                )));
            }
            let unknown = song.artist_ids.iter().find(|id| !artist_ids.contains(id.as_str()));
            if let Some(missing) = unknown {
                return Err(CatalogError::IntegrityError(format!(
                    "song '{}' credits unknown artist '{}'",
                    song.id, missing
                )));
            }
        }

        Ok(Self {
            artists,
            albums,
            songs,
            latency: Latency::None,
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(catalog::artists(), catalog::albums(), catalog::songs())
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub async fn list_artists(&self) -> Vec<Artist> {
        self.latency.pause(LIST_DELAY_MS).await;
        self.artists.clone()
    }

    pub async fn get_artist(&self, id: &str) -> Option<Artist> {
        self.latency.pause(LOOKUP_DELAY_MS).await;
        self.artists.iter().find(|a| a.id == id).cloned()
    }

    pub async fn list_albums(&self) -> Vec<Album> {
        self.latency.pause(LIST_DELAY_MS).await;
        self.albums.clone()
    }

    pub async fn get_album(&self, id: &str) -> Option<Album> {
        self.latency.pause(LOOKUP_DELAY_MS).await;
        self.albums.iter().find(|a| a.id == id).cloned()
    }

    pub async fn get_song(&self, id: &str) -> Option<Song> {
        self.latency.pause(LOOKUP_DELAY_MS).await;
        self.songs.iter().find(|s| s.id == id).cloned()
    }

    /// Returns the songs passing both the free-text and the structured
    /// filter, in catalog order.
    ///
    /// An empty `search_text` and a `None` criteria each leave the song set
    /// untouched, so `query_songs(None, None)` yields the whole catalog.
    pub async fn query_songs(
        &self,
        criteria: Option<&FilterCriteria>,
        search_text: Option<&str>,
    ) -> Vec<Song> {
        self.latency.pause(QUERY_DELAY_MS).await;

        let needle = search_text
            .filter(|text| !text.is_empty())
            .map(|text| text.to_lowercase());

        self.songs
            .iter()
            .filter(|song| match &needle {
                Some(needle) => self.matches_text(song, needle),
                None => true,
            })
            .filter(|song| match criteria {
                Some(criteria) => matches_criteria(song, criteria),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Credited artists of `song`, in credit order.
    pub fn song_artists(&self, song: &Song) -> Vec<&Artist> {
        song.artist_ids
            .iter()
            .filter_map(|id| self.artists.iter().find(|a| &a.id == id))
            .collect()
    }

    pub fn song_album(&self, song: &Song) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == song.album_id)
    }

    pub fn album_artists(&self, album: &Album) -> Vec<&Artist> {
        album
            .artist_ids
            .iter()
            .filter_map(|id| self.artists.iter().find(|a| &a.id == id))
            .collect()
    }

    pub fn count_songs_by_artist(&self, artist_id: &str) -> usize {
        self.songs
            .iter()
            .filter(|s| s.artist_ids.iter().any(|id| id == artist_id))
            .count()
    }

    pub fn count_artists(&self) -> usize {
        self.artists.len()
    }

    pub fn count_albums(&self) -> usize {
        self.albums.len()
    }

    pub fn count_songs(&self) -> usize {
        self.songs.len()
    }

    /// `needle` must already be lowercase.
    fn matches_text(&self, song: &Song, needle: &str) -> bool {
        let contains = |value: &str| value.to_lowercase().contains(needle);

        contains(song.title.as_str())
            || song.genres.iter().any(|g| contains(g.as_str()))
            || song.instrumentation.iter().any(|i| contains(i.as_str()))
            || song.moods.iter().any(|m| contains(m.as_str()))
            || self.song_artists(song).iter().any(|a| contains(a.name.as_str()))
    }
}

/// Conjunction of every constraint present in `criteria`. Empty strings
/// count as absent.
fn matches_criteria(song: &Song, criteria: &FilterCriteria) -> bool {
    let present = |value: &Option<String>| -> Option<String> {
        value.as_deref().filter(|v| !v.is_empty()).map(str::to_owned)
    };
    let features = &song.audio_features;

    if let Some(genre) = present(&criteria.genre) {
        if !song.genres.contains(&genre) {
            return false;
        }
    }
    if let Some(mood) = criteria.mood {
        if !song.moods.contains(&mood) {
            return false;
        }
    }
    if let Some(min_tempo) = criteria.min_tempo {
        if features.tempo < min_tempo {
            return false;
        }
    }
    if let Some(max_tempo) = criteria.max_tempo {
        if features.tempo > max_tempo {
            return false;
        }
    }
    if let Some(key) = criteria.key {
        if features.key != key {
            return false;
        }
    }
    if let Some(instrument) = present(&criteria.instrument) {
        if !song.instrumentation.contains(&instrument) {
            return false;
        }
    }

    true
}

fn unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<HashSet<&'a str>, CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    Ok(seen)
}
