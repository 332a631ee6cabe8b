//! `GET /api/health`

use axum::Json;

use ebios_types::api::HealthStatus;

pub const SERVICE_NAME: &str = "Ebios AI";
pub const SERVICE_VERSION: &str = "1.5";

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HealthStatus::ONLINE.to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
