use crate::{
    Res, config,
    generation::TemplateGenerator,
    management::{CatalogManager, Latency, PlaylistManager},
    storage::{FileStorage, PlaylistStorage},
    types::Playlist,
};

/// Everything a command needs, built once at process start.
pub struct AppContext {
    pub catalog: CatalogManager,
    pub playlists: PlaylistManager,
    pub generator: TemplateGenerator,
    pub latency: Latency,
}

impl AppContext {
    /// Builds the context from the environment configuration, persisting
    /// playlists under [`config::data_dir`].
    pub async fn init() -> Res<Self> {
        let storage = FileStorage::new(config::data_dir(), config::playlist_key());
        let (ctx, _) = Self::with_storage(
            storage,
            Latency::from_flag(config::simulate_latency()),
            config::seed_playlists(),
        )
        .await?;
        Ok(ctx)
    }

    /// Builds the context on top of an explicit storage backend. Returns the
    /// seeded playlist when this was a first run and seeding is enabled.
    pub async fn with_storage(
        storage: impl PlaylistStorage + 'static,
        latency: Latency,
        seed: bool,
    ) -> Res<(Self, Option<Playlist>)> {
        let catalog = CatalogManager::builtin()?.with_latency(latency);
        let playlists = PlaylistManager::new(storage).with_latency(latency);
        let generator = TemplateGenerator::new(config::model()).with_latency(latency);

        let seeded = if seed {
            playlists.seed_first_run(&catalog).await?
        } else {
            None
        };

        Ok((
            Self {
                catalog,
                playlists,
                generator,
                latency,
            },
            seeded,
        ))
    }
}
