use crate::{context::AppContext, generation, info, utils, warning};

pub async fn song(ctx: &AppContext, song_id: String, query_context: Option<String>) {
    let Some(song) = ctx.catalog.get_song(&song_id).await else {
        warning!("Song {} not found", song_id);
        return;
    };

    let artist_names = utils::join_names(
        ctx.catalog
            .song_artists(&song)
            .iter()
            .map(|a| a.name.as_str()),
    );
    let features = &song.audio_features;

    info!("{} by {}", song.title, artist_names);
    if let Some(album) = ctx.catalog.song_album(&song) {
        info!("Album: {} ({})", album.title, album.release_year);
    }
    info!("Duration: {}", utils::format_duration(song.duration_seconds));
    info!("Genres: {}", song.genres.join(", "));
    info!(
        "Moods: {}",
        utils::join_names(song.moods.iter().map(|m| m.as_str()))
    );
    info!("Instrumentation: {}", song.instrumentation.join(", "));
    info!(
        "Tempo: {}, Key: {} ({})",
        utils::format_tempo(features.tempo),
        features.key,
        features.mode
    );
    info!(
        "Energy {:.2}, Danceability {:.2}, Valence {:.2}, Acousticness {:.2}, Instrumentalness {:.2}",
        features.energy,
        features.danceability,
        features.valence,
        features.acousticness,
        features.instrumentalness
    );
    info!(
        "Chord progressions: {}",
        song.music_theory.chord_progressions.join(" | ")
    );
    info!("Scales: {}", song.music_theory.scales_used.join(", "));

    let pb = super::spinner("Generating description...");
    let description = generation::describe_song(&ctx.generator, &song.title, &artist_names).await;
    let reason = match query_context.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(context) => {
            Some(generation::recommendation_reason(&ctx.generator, &song.title, context).await)
        }
        None => None,
    };
    pb.finish_and_clear();

    info!("{}", description.text);
    if let Some(reason) = reason {
        info!("{}", reason.text);
        for source in reason.sources {
            info!("Source: {} ({})", source.title, source.uri);
        }
    }
}
