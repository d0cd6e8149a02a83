use application::shared::KeyValueStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// 未配置数据库时使用的进程内键值存储，重启后数据丢失
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    store: Arc<DashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get_string(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.store.get(key).map(|v| v.value().clone()))
    }

    async fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
