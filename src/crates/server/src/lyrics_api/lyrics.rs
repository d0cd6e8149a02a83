use super::request::FetchLyricsBody;
use super::response::lyrics::LyricsResponse;
use super::response::ErrorBody;
use crate::error::ApiError;
use crate::AppState;
use actix_web::web::{self, Json};
use actix_web::HttpResponse;
use application::query::fetch_lyrics::FetchLyricsRequest;
use log::{debug, warn};

/// fetchLyrics - 获取同步歌词并叠加该视频的 offset
///
/// 业务失败（LoggedOut / TrackNotFound / LyricsNotFound / UnknownError）
/// 以 200 返回 `{"error": kind}`，只有请求体无法解析时才返回 422。
pub async fn fetch_lyrics(
    state: web::Data<AppState>,
    Json(body): Json<FetchLyricsBody>,
) -> Result<HttpResponse, ApiError> {
    let req = FetchLyricsRequest::try_from(body)?;
    let video_id = req.video_id.clone();

    match state.fetch_lyrics.handle(req).await {
        Ok(payload) => {
            debug!(
                "Lyrics for video {}: {} lines, offset {}",
                video_id,
                payload.lyrics.lines.len(),
                payload.offset
            );
            Ok(HttpResponse::Ok().json(LyricsResponse::from(payload)))
        }
        Err(e) => {
            warn!("fetchLyrics for video {} failed: {}", video_id, e);
            Ok(HttpResponse::Ok().json(ErrorBody { error: e.kind() }))
        }
    }
}
