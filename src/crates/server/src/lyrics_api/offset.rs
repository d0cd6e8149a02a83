use super::request::SetOffsetBody;
use super::response::SetOffsetAck;
use crate::error::ApiError;
use crate::AppState;
use actix_web::web::{self, Json};
use log::error;

pub async fn set_offset(
    state: web::Data<AppState>,
    Json(body): Json<SetOffsetBody>,
) -> Result<Json<SetOffsetAck>, ApiError> {
    state.offsets.set_offset(body.into()).await.map_err(|e| {
        error!("Error setting offset: {}", e);
        ApiError::Internal("Error setting offset".to_string())
    })?;

    Ok(Json(SetOffsetAck { success: true }))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{send, FailingStore, StateBuilder};
    use actix_web::{http::StatusCode, test};
    use application::shared::KeyValueStore;
    use infra::repository::in_memory::InMemoryKeyValueStore;
    use serde_json::{json, Value};

    fn set_offset(video_id: &str, offset: i64) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/setOffset")
            .set_json(json!({"videoID": video_id, "offset": offset}))
    }

    #[actix_web::test]
    async fn test_set_offset_persists() {
        let store = InMemoryKeyValueStore::new();
        let state = StateBuilder::new().store(store.clone()).build();

        let resp = send(state, set_offset("dQw4w9WgXcQ", 1500)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": true}));

        let stored = store.get_string("offset:dQw4w9WgXcQ").await.unwrap();
        assert_eq!(stored.as_deref(), Some("1500"));
    }

    #[actix_web::test]
    async fn test_store_failure_is_500() {
        let state = StateBuilder::new().store(FailingStore).build();

        let resp = send(state, set_offset("dQw4w9WgXcQ", 1500)).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"detail": "Error setting offset"}));
    }

    #[actix_web::test]
    async fn test_non_integer_offset_is_422() {
        let req = test::TestRequest::post()
            .uri("/setOffset")
            .set_json(json!({"videoID": "dQw4w9WgXcQ", "offset": "soon"}));

        let resp = send(StateBuilder::new().build(), req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
