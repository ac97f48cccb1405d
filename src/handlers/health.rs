use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Fixed identification payload the stock frontend probes for.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "name": "Cloudflare" }))
}
