/// 简单的字符串键值存储，offset 等小型持久化数据都放在这里
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_string(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
