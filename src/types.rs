use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Calm,
    Romantic,
    Melancholic,
    Uplifting,
    Dark,
    Chill,
    Experimental,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Calm,
        Mood::Romantic,
        Mood::Melancholic,
        Mood::Uplifting,
        Mood::Dark,
        Mood::Chill,
        Mood::Experimental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Calm => "Calm",
            Mood::Romantic => "Romantic",
            Mood::Melancholic => "Melancholic",
            Mood::Uplifting => "Uplifting",
            Mood::Dark => "Dark",
            Mood::Chill => "Chill",
            Mood::Experimental => "Experimental",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("unknown mood '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeySignature {
    #[serde(rename = "C Major")]
    CMajor,
    #[serde(rename = "A Minor")]
    AMinor,
    #[serde(rename = "G Major")]
    GMajor,
    #[serde(rename = "E Minor")]
    EMinor,
    #[serde(rename = "D Major")]
    DMajor,
    #[serde(rename = "B Minor")]
    BMinor,
    #[serde(rename = "F Major")]
    FMajor,
    #[serde(rename = "D Minor")]
    DMinor,
}

impl KeySignature {
    pub const ALL: [KeySignature; 8] = [
        KeySignature::CMajor,
        KeySignature::AMinor,
        KeySignature::GMajor,
        KeySignature::EMinor,
        KeySignature::DMajor,
        KeySignature::BMinor,
        KeySignature::FMajor,
        KeySignature::DMinor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeySignature::CMajor => "C Major",
            KeySignature::AMinor => "A Minor",
            KeySignature::GMajor => "G Major",
            KeySignature::EMinor => "E Minor",
            KeySignature::DMajor => "D Major",
            KeySignature::BMinor => "B Minor",
            KeySignature::FMajor => "F Major",
            KeySignature::DMinor => "D Minor",
        }
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts "A Minor", "a minor" and "AMinor" alike.
impl FromStr for KeySignature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |v: &str| -> String {
            v.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_lowercase()
        };
        let wanted = squash(s);
        KeySignature::ALL
            .iter()
            .find(|k| squash(k.as_str()) == wanted)
            .copied()
            .ok_or_else(|| format!("unknown key signature '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => f.write_str("Major"),
            Mode::Minor => f.write_str("Minor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Beats per minute, always positive.
    pub tempo: f64,
    pub key: KeySignature,
    pub mode: Mode,
    pub energy: f64,
    pub danceability: f64,
    /// Positiveness of the track, 0.0 to 1.0.
    pub valence: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicTheory {
    pub chord_progressions: Vec<String>,
    pub scales_used: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist_ids: Vec<String>,
    pub release_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist_ids: Vec<String>,
    pub album_id: String,
    pub duration_seconds: u32,
    pub genres: Vec<String>,
    pub moods: Vec<Mood>,
    pub audio_features: AudioFeatures,
    pub instrumentation: Vec<String>,
    pub music_theory: MusicTheory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,
}

/// A user playlist as persisted in the playlist blob.
///
/// `song_ids` keeps insertion order and never holds the same id twice once
/// it went through [`crate::management::PlaylistManager`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub song_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Structured song query. Every `None` field leaves that dimension
/// unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub mood: Option<Mood>,
    pub min_tempo: Option<f64>,
    pub max_tempo: Option<f64>,
    pub key: Option<KeySignature>,
    pub instrument: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingChunk {
    pub uri: String,
    pub title: String,
}

/// Free-form text returned by a [`crate::generation::TextGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<GroundingChunk>,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub id: String,
    pub title: String,
    pub artists: String,
    pub album: String,
    pub genres: String,
    pub tempo: String,
    pub key: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub songs: usize,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub id: String,
    pub title: String,
    pub artists: String,
    pub year: i32,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub songs: usize,
    pub description: String,
}
