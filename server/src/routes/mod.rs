//! HTTP routes

pub mod brands;

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Collection address; items live at `/api/brands/:id`.
pub const BRANDS_PATH: &str = "/api/brands";

pub fn brand_location(id: i64) -> String {
    format!("{BRANDS_PATH}/{id}")
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}
