use crate::value::TrackId;

/// 曲库条目，每个请求内构造一次，构造后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    /// 艺术家名称，保持上游顺序
    pub artists: Vec<String>,
    pub album_name: String,
    /// 封面图 URL，保持上游顺序（不保证从大到小）
    pub cover_art: Vec<String>,
    pub duration_ms: i64,
}

impl Track {
    pub fn new(
        id: TrackId,
        name: String,
        artists: Vec<String>,
        album_name: String,
        cover_art: Vec<String>,
        duration_ms: i64,
    ) -> Self {
        Self {
            id,
            name,
            artists,
            album_name,
            cover_art,
            duration_ms,
        }
    }
}
