use super::db_data::kv_store::{ActiveModel, Column, Entity};
use application::shared::KeyValueStore;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

/// Postgres-backed key-value store (`kv_store` table).
#[derive(Clone)]
pub struct KeyValueStoreImpl {
    db: DatabaseConnection,
}

impl KeyValueStoreImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStoreImpl {
    async fn get_string(&self, key: &str) -> anyhow::Result<Option<String>> {
        let result = Entity::find_by_id(key.to_string()).one(&self.db).await?;
        Ok(result.map(|m| m.value))
    }

    async fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let now = chrono::Utc::now().naive_utc();
        let active_model = ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // 已存在的 key 只更新 value 和 updated_at
        Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }
}
