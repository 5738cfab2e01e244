use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Welcome payload embedding the configured application name
#[tracing::instrument(skip(state))]
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {} API", state.config.app_name)
    }))
}
