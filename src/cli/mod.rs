//! # CLI Module
//!
//! User-facing commands of tunecli. Each command receives the
//! [`AppContext`](crate::context::AppContext) built at startup, calls into the
//! catalog and playlist managers, and renders the result as tables or
//! status lines.
//!
//! ## Command Categories
//!
//! ### Catalog
//!
//! - [`search`] - Free-text and structured song search
//! - [`song`] - Song details with a generated description
//! - [`list_artists`] / [`list_albums`] - Reference data listings
//!
//! ### Playlists
//!
//! - [`list_playlists`], [`show_playlist`], [`create_playlist`],
//!   [`add_song`], [`remove_song`], [`delete_playlist`]
//!
//! ### Misc
//!
//! - [`chat`] - Ask the music expert
//! - [`info`] - Storage location, catalog counts and filter choices
//!
//! ## Error Handling
//!
//! Unknown ids are reported as warnings. Validation and persistence
//! failures end the process through [`crate::error!`]; a failed write leaves
//! the previously persisted playlists untouched.

mod artists;
mod chat;
mod info;
mod playlist;
mod search;
mod song;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use artists::list_albums;
pub use artists::list_artists;
pub use chat::chat;
pub use info::info;
pub use playlist::add_song;
pub use playlist::create_playlist;
pub use playlist::delete_playlist;
pub use playlist::list_playlists;
pub use playlist::remove_song;
pub use playlist::show_playlist;
pub use search::search;
pub use song::song;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
