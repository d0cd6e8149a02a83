use crate::AppState;
use actix_web::dev::ServiceResponse;
use actix_web::{test, web, App};
use application::shared::KeyValueStore;
use domain::provider::{CatalogProvider, LyricsProvider};
use infra::repository::in_memory::InMemoryKeyValueStore;
use std::sync::Arc;

pub(crate) use application::test_support::{track_item, FailingStore, FakeCatalog, FakeLyrics};

pub(crate) struct StateBuilder {
    catalog: Arc<dyn CatalogProvider>,
    lyrics: Arc<dyn LyricsProvider>,
    store: Arc<dyn KeyValueStore>,
}

impl StateBuilder {
    pub(crate) fn new() -> Self {
        Self {
            catalog: Arc::new(FakeCatalog::default()),
            lyrics: Arc::new(FakeLyrics::empty()),
            store: Arc::new(InMemoryKeyValueStore::new()),
        }
    }

    pub(crate) fn catalog(mut self, catalog: impl CatalogProvider + 'static) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub(crate) fn lyrics(mut self, lyrics: impl LyricsProvider + 'static) -> Self {
        self.lyrics = Arc::new(lyrics);
        self
    }

    pub(crate) fn store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Arc::new(store);
        self
    }

    pub(crate) fn build(self) -> AppState {
        AppState::from_parts(self.catalog, self.lyrics, self.store)
    }
}

pub(crate) async fn send(state: AppState, req: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(super::configure_service),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}
