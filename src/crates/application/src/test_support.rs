//! In-process fakes for the provider and storage seams.
//!
//! Compiled for this crate's tests and, through the `test-support` feature,
//! for the server's handler tests.

use crate::shared::KeyValueStore;
use domain::provider::{
    CatalogError, CatalogProvider, LyricsProvider, LyricsProviderError, ProviderLyrics,
    ProviderTrack,
};
use domain::value::TrackId;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Spotify 搜索结果中的单条曲目，艺术家、专辑与封面均由 id 派生
pub fn track_item(id: &str, name: &str) -> ProviderTrack {
    ProviderTrack(json!({
        "id": id,
        "name": name,
        "artists": [{"name": format!("Artist of {}", id)}],
        "album": {
            "name": format!("Album of {}", id),
            "images": [{"url": format!("https://img/{}", id), "height": 640, "width": 640}]
        },
        "duration_ms": 180000
    }))
}

#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn insert(&self, key: &str, value: &str) {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.lock().unwrap().get(key).cloned()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_string(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

pub struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get_string(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("connection refused")
    }

    async fn set_string(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }
}

#[derive(Clone, Default)]
pub struct FakeCatalog {
    items: Vec<ProviderTrack>,
    failure: Option<fn() -> CatalogError>,
    calls: Arc<Mutex<Vec<(String, u32)>>>,
}

impl FakeCatalog {
    pub fn with_items(items: Vec<ProviderTrack>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn failing(failure: fn() -> CatalogError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CatalogProvider for FakeCatalog {
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ProviderTrack>, CatalogError> {
        self.calls.lock().unwrap().push((query.to_string(), limit));
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(self.items.iter().take(limit as usize).cloned().collect())
    }
}

#[derive(Clone, Default)]
pub struct FakeLyrics {
    records: HashMap<String, ProviderLyrics>,
    failure: Option<fn() -> LyricsProviderError>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl FakeLyrics {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_record(track_id: &str, record: ProviderLyrics) -> Self {
        let mut records = HashMap::new();
        records.insert(track_id.to_string(), record);
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn failing(failure: fn() -> LyricsProviderError) -> Self {
        Self {
            failure: Some(failure),
            ..Default::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LyricsProvider for FakeLyrics {
    async fn get_lyrics_by_id(
        &self,
        track_id: &TrackId,
    ) -> Result<Option<ProviderLyrics>, LyricsProviderError> {
        self.requested
            .lock()
            .unwrap()
            .push(track_id.as_str().to_string());
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(self.records.get(track_id.as_str()).cloned())
    }
}
