pub const SERVICE_NAME: &str = "lyrics-api";

pub const URL_PATH_ROOT: &str = "/";
pub const URL_PATH_HEALTH: &str = "/health";
pub const URL_PATH_GET_TRACKS: &str = "/getTracks";
pub const URL_PATH_FETCH_LYRICS: &str = "/fetchLyrics";
pub const URL_PATH_SET_OFFSET: &str = "/setOffset";

/// CORS 预检结果缓存时间（秒）
pub const CORS_MAX_AGE: usize = 3600;
