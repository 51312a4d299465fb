use tabled::Table;

use crate::{
    context::AppContext,
    types::{AlbumTableRow, ArtistTableRow},
    utils, warning,
};

pub async fn list_artists(ctx: &AppContext, search: Option<String>) {
    let mut artists = ctx.catalog.list_artists().await;
    artists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    if let Some(artist_search) = search {
        let search_term = artist_search.to_lowercase();
        artists.retain(|a| a.name.to_lowercase().contains(&search_term));
    }

    if artists.is_empty() {
        warning!("No artists found");
        return;
    }

    let table_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|a| ArtistTableRow {
            songs: ctx.catalog.count_songs_by_artist(&a.id),
            id: a.id,
            name: a.name,
        })
        .collect();

    println!("{}", Table::new(table_rows));
}

pub async fn list_albums(ctx: &AppContext) {
    let albums = ctx.catalog.list_albums().await;

    let table_rows: Vec<AlbumTableRow> = albums
        .iter()
        .map(|album| AlbumTableRow {
            id: album.id.clone(),
            title: album.title.clone(),
            artists: utils::join_names(
                ctx.catalog
                    .album_artists(album)
                    .iter()
                    .map(|a| a.name.as_str()),
            ),
            year: album.release_year,
        })
        .collect();

    println!("{}", Table::new(table_rows));
}
