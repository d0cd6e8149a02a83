use crate::error::AppError;
use crate::normalize::normalize_track;
use domain::provider::CatalogProvider;
use domain::track::Track;
use log::error;
use std::sync::Arc;

/// Number of candidates returned by the track search endpoint.
pub const SEARCH_LIMIT: u32 = 30;

#[derive(Clone)]
pub struct SearchTracks {
    catalog: Arc<dyn CatalogProvider>,
}

impl SearchTracks {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    /// 搜索曲目并逐条规范化，保持上游排序
    ///
    /// Catalog unavailability surfaces as [`AppError::UpstreamUnavailable`];
    /// every other failure, including a single malformed candidate, fails the
    /// whole search.
    pub async fn handle(&self, query: &str) -> Result<Vec<Track>, AppError> {
        let candidates = self
            .catalog
            .search_tracks(query, SEARCH_LIMIT)
            .await
            .map_err(|e| {
                error!("Error searching tracks: {}", e);
                AppError::from(e)
            })?;

        candidates
            .iter()
            .map(|candidate| {
                normalize_track(candidate).map_err(|e| {
                    error!("Error transforming track data: {}", e);
                    AppError::from(e)
                })
            })
            .collect()
    }
}
