pub mod lyrics;
pub mod offset;
pub mod request;
pub mod response;
pub mod system;
pub mod tracks;

#[cfg(test)]
pub(crate) mod test_support;

use crate::consts;
use crate::error::ApiError;
use actix_web::web;
use log::warn;

/// 请求体解析失败统一返回 422 `{"detail": ...}`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("Rejected request body for {}: {}", req.path(), err);
        ApiError::InvalidInput(err.to_string()).into()
    })
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.app_data(json_config())
        .route(consts::URL_PATH_ROOT, web::get().to(system::health))
        .route(consts::URL_PATH_HEALTH, web::get().to(system::health))
        .route(consts::URL_PATH_GET_TRACKS, web::post().to(tracks::get_tracks))
        .route(consts::URL_PATH_FETCH_LYRICS, web::post().to(lyrics::fetch_lyrics))
        .route(consts::URL_PATH_SET_OFFSET, web::post().to(offset::set_offset));
}
