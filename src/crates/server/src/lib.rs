pub mod consts;
pub mod error;
pub mod lyrics_api;
pub mod middleware;

use application::command::offset::OffsetAppService;
use application::query::fetch_lyrics::FetchLyrics;
use application::query::search_tracks::SearchTracks;
use application::shared::KeyValueStore;
use domain::provider::{CatalogProvider, LyricsProvider};
use infra::config::AppConfigImpl;
use infra::repository::in_memory::InMemoryKeyValueStore;
use infra::repository::postgres::KeyValueStoreImpl;
use infra::{SpotifyCatalogClient, SpotifyLyricsClient};
use log::{info, warn};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};
use std::sync::Arc;
use std::time::Duration;

pub struct AppState {
    pub search_tracks: SearchTracks,
    pub fetch_lyrics: FetchLyrics,
    pub offsets: OffsetAppService,
}

impl AppState {
    pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(20)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(3))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .max_lifetime(Duration::from_secs(300))
            .sqlx_logging(false)
            .sqlx_logging_level(log::LevelFilter::Info);

        let db = Database::connect(opt).await?;

        let backend = DbBackend::Postgres;
        db.execute(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await?;

        info!("Database connection pool initialized successfully");
        Ok(db)
    }

    /// 构建上游客户端（会话在首次请求时建立并复用）并选择 offset 存储
    pub async fn new(app_cfg: &AppConfigImpl) -> anyhow::Result<Self> {
        let spotify_cfg = app_cfg.spotify();
        if !spotify_cfg.has_client_credentials() {
            warn!("Spotify client credentials are not configured, track search will be unavailable");
        }
        if !spotify_cfg.has_sp_dc() {
            warn!("sp_dc cookie is not configured, lyrics will be unavailable");
        }

        let catalog: Arc<dyn CatalogProvider> =
            Arc::new(SpotifyCatalogClient::new(spotify_cfg.clone())?);
        let lyrics: Arc<dyn LyricsProvider> = Arc::new(SpotifyLyricsClient::new(spotify_cfg)?);

        let db_url = app_cfg.database_url();
        let store: Arc<dyn KeyValueStore> = if db_url.is_empty() {
            warn!("database_url is not configured, offsets are kept in memory and lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        } else {
            Arc::new(KeyValueStoreImpl::new(Self::init_db(&db_url).await?))
        };

        Ok(Self::from_parts(catalog, lyrics, store))
    }

    pub fn from_parts(
        catalog: Arc<dyn CatalogProvider>,
        lyrics: Arc<dyn LyricsProvider>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let offsets = OffsetAppService::new(store);
        Self {
            search_tracks: SearchTracks::new(catalog.clone()),
            fetch_lyrics: FetchLyrics::new(catalog, lyrics, offsets.clone()),
            offsets,
        }
    }
}
