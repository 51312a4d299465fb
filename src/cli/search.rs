use tabled::Table;

use crate::{
    context::AppContext,
    generation, info,
    types::{FilterCriteria, Song, SongTableRow},
    utils, warning,
};

pub async fn search(ctx: &AppContext, query: Option<String>, criteria: FilterCriteria) {
    let query = query.unwrap_or_default();

    // the interpretation is narrative only, results come from the filter below
    if !query.is_empty() {
        let pb = super::spinner("Interpreting query...");
        let interpretation = generation::interpret_query(&ctx.generator, &query).await;
        pb.finish_and_clear();

        info!("{}", interpretation.text);
        for source in interpretation.sources {
            info!("Source: {} ({})", source.title, source.uri);
        }
    }

    let criteria = if criteria.is_empty() {
        None
    } else {
        Some(&criteria)
    };
    let songs = ctx.catalog.query_songs(criteria, Some(query.as_str())).await;

    if songs.is_empty() {
        warning!("No songs found matching your criteria. Try a different search or adjust filters.");
        return;
    }

    info!("Found {} songs", songs.len());
    println!("{}", Table::new(song_rows(ctx, &songs)));
}

pub(crate) fn song_rows(ctx: &AppContext, songs: &[Song]) -> Vec<SongTableRow> {
    songs
        .iter()
        .map(|song| SongTableRow {
            id: song.id.clone(),
            title: song.title.clone(),
            artists: utils::join_names(
                ctx.catalog
                    .song_artists(song)
                    .iter()
                    .map(|a| a.name.as_str()),
            ),
            album: ctx
                .catalog
                .song_album(song)
                .map(|a| a.title.clone())
                .unwrap_or_default(),
            genres: song.genres.join(", "),
            tempo: utils::format_tempo(song.audio_features.tempo),
            key: song.audio_features.key.to_string(),
            duration: utils::format_duration(song.duration_seconds),
        })
        .collect()
}
