//! Built-in reference snapshot.
//!
//! The catalog is small and fixed: five artists, five albums and five songs.
//! It is loaded once by [`crate::management::CatalogManager::builtin`] and
//! never mutated afterwards.

use crate::types::{
    Album, Artist, AudioFeatures, KeySignature, Mode, Mood, MusicTheory, Song,
};

/// Genres offered as filter choices by the front end.
pub const GENRES: [&str; 9] = [
    "Jazz",
    "Rock",
    "Classical",
    "Electronic",
    "Hip Hop",
    "Blues",
    "Folk",
    "Pop",
    "Ambient",
];

/// Instruments offered as filter choices by the front end.
pub const INSTRUMENTS: [&str; 9] = [
    "Piano",
    "Guitar",
    "Drums",
    "Bass",
    "Violin",
    "Saxophone",
    "Trumpet",
    "Synthesizer",
    "Vocals",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn cover(seed: &str) -> Option<String> {
    Some(format!("https://picsum.photos/seed/{}/300/300", seed))
}

pub fn artists() -> Vec<Artist> {
    [
        ("artist1", "The Midnight Moondrops"),
        ("artist2", "Echoes of Andromeda"),
        ("artist3", "Solaris Synthetica"),
        ("artist4", "Nina Simone"),
        ("artist5", "Miles Davis"),
    ]
    .into_iter()
    .map(|(id, name)| Artist {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

pub fn albums() -> Vec<Album> {
    [
        ("album1", "Lunar Rhythms", "artist1", 2022),
        ("album2", "Cosmic Harmonies", "artist2", 2023),
        ("album3", "Digital Dreams", "artist3", 2021),
        ("album4", "I Put a Spell on You", "artist4", 1965),
        ("album5", "Kind of Blue", "artist5", 1959),
    ]
    .into_iter()
    .map(|(id, title, artist_id, release_year)| Album {
        id: id.to_string(),
        title: title.to_string(),
        artist_ids: vec![artist_id.to_string()],
        release_year,
        cover_art_url: cover(id),
    })
    .collect()
}

pub fn songs() -> Vec<Song> {
    vec![
        Song {
            id: "song1".to_string(),
            title: "Neon Interlude".to_string(),
            artist_ids: strings(&["artist1"]),
            album_id: "album1".to_string(),
            duration_seconds: 245,
            genres: strings(&["Jazz", "Electronic", "Chill"]),
            moods: vec![Mood::Calm, Mood::Melancholic, Mood::Chill],
            audio_features: AudioFeatures {
                tempo: 90.0,
                key: KeySignature::AMinor,
                mode: Mode::Minor,
                energy: 0.4,
                danceability: 0.6,
                valence: 0.3,
                acousticness: 0.1,
                instrumentalness: 0.8,
            },
            instrumentation: strings(&["Piano", "Synthesizer", "Drums", "Saxophone"]),
            music_theory: MusicTheory {
                chord_progressions: strings(&["Am7 - Dm7 - G7 - Cmaj7", "ii-V-I in A minor"]),
                scales_used: strings(&["A Minor Pentatonic", "Dorian Mode"]),
            },
            cover_art_url: cover("song1"),
        },
        Song {
            id: "song2".to_string(),
            title: "Starlight Serenade".to_string(),
            artist_ids: strings(&["artist2"]),
            album_id: "album2".to_string(),
            duration_seconds: 320,
            genres: strings(&["Ambient", "Classical", "Electronic"]),
            moods: vec![Mood::Calm, Mood::Uplifting, Mood::Experimental],
            audio_features: AudioFeatures {
                tempo: 110.0,
                key: KeySignature::CMajor,
                mode: Mode::Major,
                energy: 0.3,
                danceability: 0.2,
                valence: 0.6,
                acousticness: 0.7,
                instrumentalness: 0.9,
            },
            instrumentation: strings(&["Strings", "Synthesizer Pad", "Piano"]),
            music_theory: MusicTheory {
                chord_progressions: strings(&["Cmaj7 - Fmaj7 - Gsus - G", "I-IV-V progression"]),
                scales_used: strings(&["C Major Scale", "Lydian Mode"]),
            },
            cover_art_url: cover("song2"),
        },
        Song {
            id: "song3".to_string(),
            title: "Cybernetic Pulse".to_string(),
            artist_ids: strings(&["artist3"]),
            album_id: "album3".to_string(),
            duration_seconds: 180,
            genres: strings(&["Electronic", "Hip Hop", "Experimental"]),
            moods: vec![Mood::Energetic, Mood::Dark],
            audio_features: AudioFeatures {
                tempo: 140.0,
                key: KeySignature::DMinor,
                mode: Mode::Minor,
                energy: 0.8,
                danceability: 0.7,
                valence: 0.4,
                acousticness: 0.05,
                instrumentalness: 0.6,
            },
            instrumentation: strings(&["Synthesizer", "Drum Machine", "Bass Synth"]),
            music_theory: MusicTheory {
                chord_progressions: strings(&["Dm - Bb - C - A", "i-VI-VII-V in D minor"]),
                scales_used: strings(&["D Harmonic Minor"]),
            },
            cover_art_url: cover("song3"),
        },
        Song {
            id: "song4".to_string(),
            title: "Feeling Good".to_string(),
            artist_ids: strings(&["artist4"]),
            album_id: "album4".to_string(),
            duration_seconds: 177,
            genres: strings(&["Jazz", "Blues", "Soul"]),
            moods: vec![Mood::Uplifting, Mood::Energetic],
            audio_features: AudioFeatures {
                tempo: 80.0,
                key: KeySignature::GMajor,
                mode: Mode::Major,
                energy: 0.5,
                danceability: 0.3,
                valence: 0.7,
                acousticness: 0.8,
                instrumentalness: 0.1,
            },
            instrumentation: strings(&["Vocals", "Piano", "Bass", "Drums", "Horns"]),
            music_theory: MusicTheory {
                chord_progressions: strings(&["Gm - Ebmaj7 - Cm7 - D7", "Standard Blues Changes"]),
                scales_used: strings(&["G Blues Scale"]),
            },
            // shares the album artwork
            cover_art_url: cover("album4"),
        },
        Song {
            id: "song5".to_string(),
            title: "So What".to_string(),
            artist_ids: strings(&["artist5"]),
            album_id: "album5".to_string(),
            duration_seconds: 562,
            genres: strings(&["Jazz", "Modal Jazz"]),
            moods: vec![Mood::Chill, Mood::Melancholic],
            audio_features: AudioFeatures {
                tempo: 136.0,
                key: KeySignature::DMinor,
                mode: Mode::Minor,
                energy: 0.3,
                danceability: 0.4,
                valence: 0.2,
                acousticness: 0.5,
                instrumentalness: 0.85,
            },
            instrumentation: strings(&["Trumpet", "Saxophone", "Piano", "Bass", "Drums"]),
            music_theory: MusicTheory {
                chord_progressions: strings(&["Dm7 (16 bars) - Ebm7 (8 bars) - Dm7 (8 bars)"]),
                scales_used: strings(&["D Dorian", "Eb Dorian"]),
            },
            cover_art_url: cover("album5"),
        },
    ]
}
