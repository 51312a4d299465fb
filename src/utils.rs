use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};

use crate::types::{KeySignature, Mood};

/// Builds a playlist id from the current timestamp plus a short random
/// suffix, e.g. `playlist_1718000000000_x8Kq2a`.
pub fn generate_playlist_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!(
        "playlist_{millis}_{suffix}",
        millis = Utc::now().timestamp_millis(),
        suffix = suffix
    )
}

/// Formats seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Formats a tempo without a trailing `.0` for whole BPM values.
pub fn format_tempo(tempo: f64) -> String {
    if tempo.fract() == 0.0 {
        format!("{:.0} BPM", tempo)
    } else {
        format!("{:.1} BPM", tempo)
    }
}

pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

/// Interprets `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse_mood(s: &str) -> Result<Mood, String> {
    s.parse::<Mood>().map_err(|e| {
        let known: Vec<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();
        format!("{} (expected one of: {})", e, known.join(", "))
    })
}

pub fn parse_key(s: &str) -> Result<KeySignature, String> {
    s.parse::<KeySignature>().map_err(|e| {
        let known: Vec<&str> = KeySignature::ALL.iter().map(|k| k.as_str()).collect();
        format!("{} (expected one of: {})", e, known.join(", "))
    })
}

pub fn parse_tempo(s: &str) -> Result<f64, String> {
    let tempo: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !tempo.is_finite() || tempo < 0.0 {
        return Err(format!("tempo must be a non-negative number, got '{}'", s));
    }
    Ok(tempo)
}
