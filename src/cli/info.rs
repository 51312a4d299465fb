use crate::{
    catalog,
    context::AppContext,
    error,
    generation::TextGenerator,
    info,
    types::{KeySignature, Mood},
    utils,
};

/// Prints where playlists live and what the catalog holds.
///
/// With `filters` set, lists the values accepted by the `search` filter
/// flags instead.
pub async fn info(ctx: &AppContext, filters: bool) {
    if filters {
        info!("Genres: {}", catalog::GENRES.join(", "));
        info!(
            "Moods: {}",
            utils::join_names(Mood::ALL.iter().map(|m| m.as_str()))
        );
        info!(
            "Keys: {}",
            utils::join_names(KeySignature::ALL.iter().map(|k| k.as_str()))
        );
        info!("Instruments: {}", catalog::INSTRUMENTS.join(", "));
        return;
    }

    let playlist_count = match ctx.playlists.list_playlists().await {
        Ok(playlists) => playlists.len(),
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    };

    info!("Playlist storage: {}", ctx.playlists.storage_location());
    info!("Playlists: {}", playlist_count);
    info!(
        "Catalog: {} artists, {} albums, {} songs",
        ctx.catalog.count_artists(),
        ctx.catalog.count_albums(),
        ctx.catalog.count_songs()
    );
    info!("Text model: {}", ctx.generator.model());
    info!(
        "Simulated latency: {}",
        if ctx.latency.is_simulated() { "on" } else { "off" }
    );
}
