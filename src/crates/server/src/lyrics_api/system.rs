use super::response::HealthStatus;
use crate::consts;
use actix_web::web::Json;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: consts::SERVICE_NAME,
    })
}
