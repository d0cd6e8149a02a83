use crate::value::VideoId;

/// Key prefix used for offsets in the key-value namespace.
pub const OFFSET_KEY_PREFIX: &str = "offset:";

/// 某个视频的歌词时间偏移（毫秒，可为负）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOffset {
    pub video_id: VideoId,
    pub offset_ms: i64,
}

impl VideoOffset {
    pub fn new(video_id: VideoId, offset_ms: i64) -> Self {
        Self {
            video_id,
            offset_ms,
        }
    }

    /// 未设置过 offset 的视频按 0 处理
    pub fn unset(video_id: VideoId) -> Self {
        Self::new(video_id, 0)
    }

    pub fn storage_key(video_id: &VideoId) -> String {
        format!("{}{}", OFFSET_KEY_PREFIX, video_id)
    }

    pub fn encode_value(&self) -> String {
        self.offset_ms.to_string()
    }

    pub fn decode_value(video_id: VideoId, raw: &str) -> Result<Self, std::num::ParseIntError> {
        let offset_ms = raw.trim().parse::<i64>()?;
        Ok(Self::new(video_id, offset_ms))
    }
}
