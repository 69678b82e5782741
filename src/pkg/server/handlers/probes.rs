use axum::{Json, extract::State};
use serde_json::{Value, json};
use sqlx::query;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Json<Value> {
    tracing::debug!("service is live");
    Json(json!({"status": "ok"}))
}

pub async fn healthz(State(state): State<AppState>) -> Result<Json<Value>> {
    query("SELECT 1").execute(&*state.db_pool).await?;
    tracing::debug!("service is healthy");
    Ok(Json(json!({"status": "ok"})))
}
