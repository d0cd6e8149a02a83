use std::sync::Arc;

use crate::error::AppError;
use crate::shared::KeyValueStore;
use domain::offset::VideoOffset;
use domain::value::VideoId;
use log::info;

/// 设置视频 offset 命令
#[derive(Debug, Clone)]
pub struct SetOffsetCmd {
    pub video_id: VideoId,
    pub offset_ms: i64,
}

/// 视频 offset 应用服务
///
/// Offsets live under `offset:<videoId>` as decimal strings. Writes overwrite,
/// they never accumulate.
#[derive(Clone)]
pub struct OffsetAppService {
    store: Arc<dyn KeyValueStore>,
}

impl OffsetAppService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// 读取 offset，未设置时返回 0
    pub async fn get_offset(&self, video_id: &VideoId) -> Result<VideoOffset, AppError> {
        let key = VideoOffset::storage_key(video_id);
        let raw = self
            .store
            .get_string(&key)
            .await
            .map_err(|e| AppError::StoreError(e.to_string()))?;

        match raw {
            Some(raw) => VideoOffset::decode_value(video_id.clone(), &raw).map_err(|e| {
                AppError::StoreError(format!("invalid offset value {:?} for {}: {}", raw, key, e))
            }),
            None => Ok(VideoOffset::unset(video_id.clone())),
        }
    }

    pub async fn set_offset(&self, cmd: SetOffsetCmd) -> Result<(), AppError> {
        let offset = VideoOffset::new(cmd.video_id, cmd.offset_ms);
        let key = VideoOffset::storage_key(&offset.video_id);
        self.store
            .set_string(&key, &offset.encode_value())
            .await
            .map_err(|e| AppError::StoreError(e.to_string()))?;

        info!(
            "Setting offset {} for video {}",
            offset.offset_ms, offset.video_id
        );
        Ok(())
    }
}
