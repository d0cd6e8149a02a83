//! Seams to the two upstream providers.
//!
//! Both adapters hand back the provider's own JSON untouched; turning it into
//! [`crate::track::Track`] / [`crate::lyrics::LyricsDocument`] is the job of the
//! normalization layer.

use crate::value::TrackId;
use serde_json::Value;
use thiserror::Error;

// 曲库搜索相关错误
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("catalog request failed: {0}")]
    Request(String),
    #[error("invalid catalog response: {0}")]
    InvalidResponse(String),
}

// 歌词获取相关错误
#[derive(Error, Debug)]
pub enum LyricsProviderError {
    #[error("lyrics provider unavailable: {0}")]
    Unavailable(String),
    #[error("lyrics request failed: {0}")]
    Request(String),
    #[error("invalid lyrics response: {0}")]
    InvalidResponse(String),
}

/// 曲库返回的原始曲目记录
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderTrack(pub Value);

impl ProviderTrack {
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}

/// 歌词服务返回的原始歌词记录
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderLyrics(pub Value);

impl ProviderLyrics {
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// A `null`, empty object, empty array or empty string carries nothing.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// 按文本搜索曲目，结果按上游排序返回
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ProviderTrack>, CatalogError>;
}

#[async_trait::async_trait]
pub trait LyricsProvider: Send + Sync {
    /// `Ok(None)` means the track simply has no lyrics upstream.
    async fn get_lyrics_by_id(
        &self,
        track_id: &TrackId,
    ) -> Result<Option<ProviderLyrics>, LyricsProviderError>;
}
