use axum::Json;
use serde_json::{json, Value};

/// Liveness probe
#[tracing::instrument]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
