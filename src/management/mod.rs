mod catalog;
mod latency;
mod playlist;

pub use catalog::CatalogError;
pub use catalog::CatalogManager;
pub use latency::Latency;
pub use playlist::PlaylistError;
pub use playlist::PlaylistManager;
pub use playlist::SEED_PLAYLIST_DESCRIPTION;
pub use playlist::SEED_PLAYLIST_NAME;
