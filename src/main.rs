use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunecli::{
    cli, config, context::AppContext, error,
    types::{FilterCriteria, KeySignature, Mood},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search songs by text and filters
    Search(SearchOptions),

    /// Show song details with a generated description
    Song(SongOptions),

    /// List artists
    Artists(ArtistsOptions),

    /// List albums
    Albums,

    /// Manage playlists
    Playlist(PlaylistOptions),

    /// Ask the music expert
    Chat(ChatOptions),

    /// Storage, catalog and filter information
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Matched against titles, genres, instruments, moods and artist names
    pub query: Option<String>,

    /// Exact genre, e.g. "Jazz"
    #[clap(long)]
    pub genre: Option<String>,

    /// Mood, e.g. "Calm"
    #[clap(long, value_parser = utils::parse_mood)]
    pub mood: Option<Mood>,

    /// Lowest tempo in BPM (inclusive)
    #[clap(long, value_parser = utils::parse_tempo)]
    pub min_tempo: Option<f64>,

    /// Highest tempo in BPM (inclusive)
    #[clap(long, value_parser = utils::parse_tempo)]
    pub max_tempo: Option<f64>,

    /// Key signature, e.g. "D Minor"
    #[clap(long, value_parser = utils::parse_key)]
    pub key: Option<KeySignature>,

    /// Exact instrument, e.g. "Piano"
    #[clap(long)]
    pub instrument: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SongOptions {
    pub song_id: String,

    /// Search context to explain the recommendation against
    #[clap(long)]
    pub context: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Search for artists
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Manage playlists")]
pub struct PlaylistOptions {
    #[command(subcommand)]
    pub command: PlaylistSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    /// List playlists
    List,

    /// Show the songs of a playlist
    Show { playlist_id: String },

    /// Create an empty playlist
    Create {
        name: String,
        #[clap(long)]
        description: Option<String>,
    },

    /// Add a song to a playlist
    Add { playlist_id: String, song_id: String },

    /// Remove a song from a playlist
    Remove { playlist_id: String, song_id: String },

    /// Delete a playlist
    Delete { playlist_id: String },
}

#[derive(Parser, Debug, Clone)]
pub struct ChatOptions {
    pub message: String,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// List accepted filter values
    #[clap(long)]
    filters: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    // completions must work without touching the data directory
    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let ctx = match AppContext::init().await {
        Ok(ctx) => ctx,
        Err(e) => error!("Cannot initialize. Err: {}", e),
    };

    match cli.command {
        Command::Search(opt) => {
            let criteria = FilterCriteria {
                genre: opt.genre,
                mood: opt.mood,
                min_tempo: opt.min_tempo,
                max_tempo: opt.max_tempo,
                key: opt.key,
                instrument: opt.instrument,
            };
            cli::search(&ctx, opt.query, criteria).await
        }
        Command::Song(opt) => cli::song(&ctx, opt.song_id, opt.context).await,
        Command::Artists(opt) => cli::list_artists(&ctx, opt.search).await,
        Command::Albums => cli::list_albums(&ctx).await,
        Command::Playlist(opt) => match opt.command {
            PlaylistSubcommand::List => cli::list_playlists(&ctx).await,
            PlaylistSubcommand::Show { playlist_id } => cli::show_playlist(&ctx, playlist_id).await,
            PlaylistSubcommand::Create { name, description } => {
                cli::create_playlist(&ctx, name, description).await
            }
            PlaylistSubcommand::Add {
                playlist_id,
                song_id,
            } => cli::add_song(&ctx, playlist_id, song_id).await,
            PlaylistSubcommand::Remove {
                playlist_id,
                song_id,
            } => cli::remove_song(&ctx, playlist_id, song_id).await,
            PlaylistSubcommand::Delete { playlist_id } => {
                cli::delete_playlist(&ctx, playlist_id).await
            }
        },
        Command::Chat(opt) => cli::chat(&ctx, opt.message).await,
        Command::Info(opt) => cli::info(&ctx, opt.filters).await,
        Command::Completions(_) => {}
    }
}
