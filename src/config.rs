//! Configuration management for tunecli.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every setting has a default, so a fresh
//! install runs without any configuration at all.
//!
//! Precedence:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::{generation, utils};

pub const DEFAULT_PLAYLIST_KEY: &str = "musicExplorerPlaylists";

/// Loads environment variables from `<data_local_dir>/tunecli/.env`.
///
/// A missing file is fine; a file that exists but cannot be parsed is an
/// error. Variables already present in the environment are not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/tunecli/.env`
/// - macOS: `~/Library/Application Support/tunecli/.env`
/// - Windows: `%LOCALAPPDATA%/tunecli/.env`
pub async fn load_env() -> Result<(), String> {
    let path = default_data_dir().join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunecli");
    path
}

/// Directory holding the persisted playlists.
///
/// Reads `TUNECLI_DATA_DIR`, falling back to `<data_local_dir>/tunecli`.
pub fn data_dir() -> PathBuf {
    match env::var("TUNECLI_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => default_data_dir(),
    }
}

/// Storage key of the playlist collection (`TUNECLI_PLAYLIST_KEY`).
pub fn playlist_key() -> String {
    env::var("TUNECLI_PLAYLIST_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PLAYLIST_KEY.to_string())
}

/// Whether catalog, playlist and generator calls sleep like remote calls
/// (`TUNECLI_SIMULATE_LATENCY`, default on).
pub fn simulate_latency() -> bool {
    flag("TUNECLI_SIMULATE_LATENCY", true)
}

/// Whether the first run creates the favorites playlist
/// (`TUNECLI_SEED_PLAYLISTS`, default on).
pub fn seed_playlists() -> bool {
    flag("TUNECLI_SEED_PLAYLISTS", true)
}

/// Model label reported by the text generator (`TUNECLI_MODEL`).
pub fn model() -> String {
    env::var("TUNECLI_MODEL")
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| generation::DEFAULT_MODEL.to_string())
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| utils::parse_flag(&v))
        .unwrap_or(default)
}
