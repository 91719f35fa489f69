use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::HealthDto;

/// GET /api/health - Liveness probe
///
/// # Returns
/// - `200 OK`: `{"status": "ok", "utc": "<RFC3339>"}`
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            utc: Utc::now(),
        }),
    )
}
