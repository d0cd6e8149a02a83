use crate::normalize::NormalizeError;
use domain::provider::CatalogError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // 上游会话不可用（未配置凭据 / 鉴权失败 / 无法连接）
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("Upstream error: {0}")]
    UpstreamError(String),
    #[error(transparent)]
    InvalidData(#[from] NormalizeError),
    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Unavailable(msg) => AppError::UpstreamUnavailable(msg),
            other => AppError::UpstreamError(other.to_string()),
        }
    }
}
