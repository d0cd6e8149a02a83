use super::request::GetTracksBody;
use super::response::track::TrackDto;
use crate::error::ApiError;
use crate::AppState;
use actix_web::web::{self, Json};
use log::error;

/// getTracks - 按关键字搜索曲目，保持上游排序
pub async fn get_tracks(
    state: web::Data<AppState>,
    Json(body): Json<GetTracksBody>,
) -> Result<Json<Vec<TrackDto>>, ApiError> {
    let tracks = state.search_tracks.handle(&body.query).await.map_err(|e| {
        error!("Error searching tracks: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(tracks.into_iter().map(TrackDto::from).collect()))
}
