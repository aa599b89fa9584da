use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::utils::time::local_iso_timestamp;

#[axum::debug_handler]
pub async fn home() -> impl IntoResponse {
    let body = json!({
        "status": "online",
        "message": "Welcome to SkinSync API!",
        "timestamp": local_iso_timestamp(),
    });
    (StatusCode::OK, Json(body))
}
