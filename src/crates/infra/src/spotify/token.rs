use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// 提前刷新的余量，避免 token 在请求途中过期
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    pub fn new(value: String, expires_in: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + expires_in,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_fresh(&self) -> bool {
        Instant::now() + EXPIRY_MARGIN < self.expires_at
    }
}

/// Memoized upstream session token.
///
/// Created once per client and shared by every request. The lock is held while
/// refreshing so concurrent requests wait for a single refresh instead of each
/// starting their own.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<AccessToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_refresh<F, Fut, E>(&self, refresh: F) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AccessToken, E>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value().to_string());
        }

        let token = refresh().await?;
        let value = token.value().to_string();
        *slot = Some(token);
        Ok(value)
    }

    /// 上游返回 401 时丢弃缓存的 token
    pub async fn invalidate(&self) {
        self.slot.lock().await.take();
    }
}
