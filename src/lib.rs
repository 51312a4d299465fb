//! Song Catalog Explorer Library
//!
//! This library backs the `tunecli` binary. It answers filtered and free-text
//! queries over a small fixed song catalog, manages user playlists persisted
//! in a key-value storage slot, and produces generated narrative text about
//! songs and queries.
//!
//! # Modules
//!
//! - `catalog` - Built-in artists, albums and songs plus filter vocabularies
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `context` - Process-start wiring of managers and storage
//! - `generation` - Text generation seam and the template generator
//! - `management` - Catalog queries and playlist CRUD
//! - `storage` - Persistence backends for the playlist collection
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tunecli::{config, context::AppContext};
//!
//! #[tokio::main]
//! async fn main() -> tunecli::Res<()> {
//!     config::load_env().await?;
//!     let ctx = AppContext::init().await?;
//!     let songs = ctx.catalog.query_songs(None, Some("jazz")).await;
//!     println!("{} songs", songs.len());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod generation;
pub mod management;
pub mod storage;
pub mod types;
pub mod utils;

/// Result alias used by the binary and the startup wiring.
///
/// Library seams return their own error enums; this alias lets them meet in
/// one place with `?` while staying `Send + Sync` for the tokio runtime.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `[o]`.
///
/// ```
/// info!("Found {} songs", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line prefixed with a green `[✓]` after a mutation went
/// through.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `[!]` line and exits with status 1.
///
/// Reserved for the command layer. Library code returns errors instead.
///
/// ```
/// error!("Cannot create playlist. Err: {}", e);
/// // unreachable from here on
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `[!]` line for recoverable conditions such as unknown
/// ids or empty results.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
