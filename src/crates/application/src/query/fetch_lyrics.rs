use crate::command::offset::OffsetAppService;
use crate::normalize::normalize_lyrics;
use domain::lyrics::{ColorHints, LyricsDocument};
use domain::provider::{CatalogError, CatalogProvider, LyricsProvider};
use domain::track::Track;
use domain::value::{TrackId, VideoId};
use log::{error, warn};
use std::sync::Arc;
use thiserror::Error;

/// 歌词查找目标：直接给出曲目，或给出搜索词
#[derive(Debug, Clone, PartialEq)]
pub enum LyricsTarget {
    ByTrack(Track),
    ByQuery(String),
}

#[derive(Debug, Clone)]
pub struct FetchLyricsRequest {
    pub video_id: VideoId,
    pub target: LyricsTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LyricsPayload {
    pub lyrics: LyricsDocument,
    pub colors: ColorHints,
    pub offset: i64,
}

/// Outcomes of the lyrics path that are reported in the response body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchLyricsError {
    /// No catalog session when one was needed to resolve a query.
    #[error("LoggedOut")]
    LoggedOut,
    #[error("TrackNotFound")]
    TrackNotFound,
    #[error("LyricsNotFound")]
    LyricsNotFound,
    #[error("UnknownError: {0}")]
    UnknownError(String),
}

impl FetchLyricsError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchLyricsError::LoggedOut => "LoggedOut",
            FetchLyricsError::TrackNotFound => "TrackNotFound",
            FetchLyricsError::LyricsNotFound => "LyricsNotFound",
            FetchLyricsError::UnknownError(_) => "UnknownError",
        }
    }
}

#[derive(Clone)]
pub struct FetchLyrics {
    catalog: Arc<dyn CatalogProvider>,
    lyrics: Arc<dyn LyricsProvider>,
    offsets: OffsetAppService,
}

impl FetchLyrics {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        lyrics: Arc<dyn LyricsProvider>,
        offsets: OffsetAppService,
    ) -> Self {
        Self {
            catalog,
            lyrics,
            offsets,
        }
    }

    pub async fn handle(&self, req: FetchLyricsRequest) -> Result<LyricsPayload, FetchLyricsError> {
        let track_id = self.resolve_track_id(&req.target).await?;
        let lyrics = self.retrieve_lyrics(&track_id).await?;

        // offset 读取失败不影响歌词返回，按 0 处理
        let offset = match self.offsets.get_offset(&req.video_id).await {
            Ok(offset) => offset.offset_ms,
            Err(e) => {
                warn!(
                    "Failed to read offset for video {}, using 0: {}",
                    req.video_id, e
                );
                0
            }
        };

        Ok(LyricsPayload {
            lyrics,
            colors: ColorHints::default(),
            offset,
        })
    }

    async fn resolve_track_id(&self, target: &LyricsTarget) -> Result<TrackId, FetchLyricsError> {
        let query = match target {
            LyricsTarget::ByTrack(track) => return Ok(track.id.clone()),
            LyricsTarget::ByQuery(query) => query,
        };

        let candidates = self
            .catalog
            .search_tracks(query, 1)
            .await
            .map_err(|e| match e {
                CatalogError::Unavailable(msg) => {
                    warn!("Catalog unavailable while resolving {:?}: {}", query, msg);
                    FetchLyricsError::LoggedOut
                }
                other => {
                    error!("Error in fetch_lyrics: {}", other);
                    FetchLyricsError::UnknownError(other.to_string())
                }
            })?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or(FetchLyricsError::TrackNotFound)?;

        first.id().map(TrackId::from).ok_or_else(|| {
            error!("Error in fetch_lyrics: search candidate has no id");
            FetchLyricsError::UnknownError("search candidate has no id".to_string())
        })
    }

    // 获取与规范化阶段的所有失败统一对外表现为 LyricsNotFound
    async fn retrieve_lyrics(&self, track_id: &TrackId) -> Result<LyricsDocument, FetchLyricsError> {
        let raw = match self.lyrics.get_lyrics_by_id(track_id).await {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return Err(FetchLyricsError::LyricsNotFound),
            Err(e) => {
                error!("Error fetching lyrics for track {}: {}", track_id, e);
                return Err(FetchLyricsError::LyricsNotFound);
            }
        };

        normalize_lyrics(&raw).map_err(|e| {
            error!("Error fetching lyrics for track {}: {}", track_id, e);
            FetchLyricsError::LyricsNotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::offset::SetOffsetCmd;
    use crate::test_support::{track_item, FailingStore, FakeCatalog, FakeLyrics, MemoryStore};
    use domain::lyrics::SyncType;
    use domain::provider::{LyricsProviderError, ProviderLyrics};
    use serde_json::json;

    fn synced_record() -> ProviderLyrics {
        ProviderLyrics(json!({
            "lyrics": {
                "lines": [
                    {"startTimeMs": "1000", "words": "one", "endTimeMs": "0"},
                    {"startTimeMs": "2000", "words": "two", "endTimeMs": "0"}
                ]
            }
        }))
    }

    fn service(catalog: FakeCatalog, lyrics: FakeLyrics, store: Arc<MemoryStore>) -> FetchLyrics {
        FetchLyrics::new(
            Arc::new(catalog),
            Arc::new(lyrics),
            OffsetAppService::new(store),
        )
    }

    fn by_query(video_id: &str, query: &str) -> FetchLyricsRequest {
        FetchLyricsRequest {
            video_id: VideoId::new(video_id),
            target: LyricsTarget::ByQuery(query.to_string()),
        }
    }

    fn by_track(video_id: &str, track_id: &str) -> FetchLyricsRequest {
        let track = Track::new(
            TrackId::new(track_id),
            "Song".to_string(),
            vec!["Artist".to_string()],
            "Album".to_string(),
            vec![],
            1000,
        );
        FetchLyricsRequest {
            video_id: VideoId::new(video_id),
            target: LyricsTarget::ByTrack(track),
        }
    }

    #[tokio::test]
    async fn test_fetch_by_query() {
        let catalog = FakeCatalog::with_items(vec![track_item("t1", "Song")]);
        let lyrics = FakeLyrics::with_record("t1", synced_record());
        let svc = service(catalog, lyrics.clone(), Arc::new(MemoryStore::default()));

        let payload = svc.handle(by_query("v1", "song")).await.unwrap();

        assert_eq!(payload.lyrics.sync_type, SyncType::LineSynced);
        assert_eq!(payload.lyrics.lines.len(), 2);
        assert_eq!(payload.colors, ColorHints::default());
        assert_eq!(payload.offset, 0);
        assert_eq!(lyrics.requested(), vec!["t1".to_string()]);
    }

    #[tokio::test]
    async fn test_search_uses_single_candidate() {
        let catalog = FakeCatalog::with_items(vec![track_item("t1", "Song")]);
        let svc = service(
            catalog.clone(),
            FakeLyrics::with_record("t1", synced_record()),
            Arc::new(MemoryStore::default()),
        );

        svc.handle(by_query("v1", "song")).await.unwrap();
        assert_eq!(catalog.calls(), vec![("song".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_fetch_by_track_skips_catalog() {
        let catalog = FakeCatalog::failing(|| CatalogError::Unavailable("down".into()));
        let svc = service(
            catalog.clone(),
            FakeLyrics::with_record("given", synced_record()),
            Arc::new(MemoryStore::default()),
        );

        let payload = svc.handle(by_track("v1", "given")).await.unwrap();
        assert_eq!(payload.lyrics.lines[0].words, "one");
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_offset_is_merged() {
        let store = Arc::new(MemoryStore::default());
        let offsets = OffsetAppService::new(store.clone());
        offsets
            .set_offset(SetOffsetCmd {
                video_id: VideoId::new("v1"),
                offset_ms: 1500,
            })
            .await
            .unwrap();

        let svc = service(
            FakeCatalog::with_items(vec![]),
            FakeLyrics::with_record("t1", synced_record()),
            store,
        );

        assert_eq!(svc.handle(by_track("v1", "t1")).await.unwrap().offset, 1500);
        assert_eq!(svc.handle(by_track("v2", "t1")).await.unwrap().offset, 0);
    }

    #[tokio::test]
    async fn test_offset_store_failure_degrades_to_zero() {
        let svc = FetchLyrics::new(
            Arc::new(FakeCatalog::with_items(vec![])),
            Arc::new(FakeLyrics::with_record("t1", synced_record())),
            OffsetAppService::new(Arc::new(FailingStore)),
        );

        let payload = svc.handle(by_track("v1", "t1")).await.unwrap();
        assert_eq!(payload.offset, 0);
    }

    #[tokio::test]
    async fn test_no_candidates_is_track_not_found() {
        let svc = service(
            FakeCatalog::with_items(vec![]),
            FakeLyrics::empty(),
            Arc::new(MemoryStore::default()),
        );

        assert_eq!(
            svc.handle(by_query("v1", "nothing")).await.unwrap_err(),
            FetchLyricsError::TrackNotFound
        );
    }

    #[tokio::test]
    async fn test_unavailable_catalog_is_logged_out() {
        let svc = service(
            FakeCatalog::failing(|| CatalogError::Unavailable("no session".into())),
            FakeLyrics::empty(),
            Arc::new(MemoryStore::default()),
        );

        assert_eq!(
            svc.handle(by_query("v1", "song")).await.unwrap_err(),
            FetchLyricsError::LoggedOut
        );
    }

    #[tokio::test]
    async fn test_catalog_request_failure_is_unknown_error() {
        let svc = service(
            FakeCatalog::failing(|| CatalogError::Request("HTTP 500".into())),
            FakeLyrics::empty(),
            Arc::new(MemoryStore::default()),
        );

        let err = svc.handle(by_query("v1", "song")).await.unwrap_err();
        assert_eq!(err.kind(), "UnknownError");
    }

    #[tokio::test]
    async fn test_candidate_without_id_is_unknown_error() {
        let svc = service(
            FakeCatalog::with_items(vec![domain::provider::ProviderTrack(json!({"name": "x"}))]),
            FakeLyrics::empty(),
            Arc::new(MemoryStore::default()),
        );

        let err = svc.handle(by_query("v1", "song")).await.unwrap_err();
        assert!(matches!(err, FetchLyricsError::UnknownError(_)));
    }

    #[tokio::test]
    async fn test_absent_lyrics_is_lyrics_not_found() {
        let svc = service(
            FakeCatalog::with_items(vec![track_item("t1", "Song")]),
            FakeLyrics::empty(),
            Arc::new(MemoryStore::default()),
        );

        assert_eq!(
            svc.handle(by_query("v1", "song")).await.unwrap_err(),
            FetchLyricsError::LyricsNotFound
        );
    }

    #[tokio::test]
    async fn test_empty_record_is_lyrics_not_found() {
        let svc = service(
            FakeCatalog::with_items(vec![]),
            FakeLyrics::with_record("t1", ProviderLyrics(json!({}))),
            Arc::new(MemoryStore::default()),
        );

        assert_eq!(
            svc.handle(by_track("v1", "t1")).await.unwrap_err(),
            FetchLyricsError::LyricsNotFound
        );
    }

    #[tokio::test]
    async fn test_provider_error_is_lyrics_not_found() {
        let svc = service(
            FakeCatalog::with_items(vec![]),
            FakeLyrics::failing(|| LyricsProviderError::Request("HTTP 500".into())),
            Arc::new(MemoryStore::default()),
        );

        assert_eq!(
            svc.handle(by_track("v1", "t1")).await.unwrap_err(),
            FetchLyricsError::LyricsNotFound
        );
    }

    #[tokio::test]
    async fn test_malformed_record_is_lyrics_not_found() {
        let svc = service(
            FakeCatalog::with_items(vec![]),
            FakeLyrics::with_record("t1", ProviderLyrics(json!({"lines": "garbage"}))),
            Arc::new(MemoryStore::default()),
        );

        assert_eq!(
            svc.handle(by_track("v1", "t1")).await.unwrap_err(),
            FetchLyricsError::LyricsNotFound
        );
    }

    #[tokio::test]
    async fn test_record_without_lines_is_unsynced_payload() {
        let svc = service(
            FakeCatalog::with_items(vec![]),
            FakeLyrics::with_record("t1", ProviderLyrics(json!({"colors": {}}))),
            Arc::new(MemoryStore::default()),
        );

        let payload = svc.handle(by_track("v1", "t1")).await.unwrap();
        assert_eq!(payload.lyrics, LyricsDocument::no_lyrics());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(FetchLyricsError::LoggedOut.kind(), "LoggedOut");
        assert_eq!(FetchLyricsError::TrackNotFound.kind(), "TrackNotFound");
        assert_eq!(FetchLyricsError::LyricsNotFound.kind(), "LyricsNotFound");
        assert_eq!(
            FetchLyricsError::UnknownError("boom".into()).kind(),
            "UnknownError"
        );
    }
}
