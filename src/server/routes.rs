use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::config::AppConfig;
use crate::fight::FightResponse;
use crate::server::api::{self, ApiError};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(api::health_payload(&state.config))
}

pub async fn hello() -> Json<Value> {
    Json(api::hello_payload())
}

/// GET /api/fight/get/:fight_id
pub async fn get_fight(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<FightResponse>, ApiError> {
    let fight_id = api::parse_fight_id(&raw_id).ok_or_else(ApiError::route_not_found)?;
    let config = Arc::clone(&state.config);

    // File reads are blocking; keep them off the async workers.
    let outcome = tokio::task::spawn_blocking(move || api::fight_payload(&config, fight_id))
        .await
        .map_err(|err| {
            tracing::error!(fight_id, "fight projection task failed: {err:?}");
            ApiError::Internal(err.to_string())
        })?;
    outcome.map(Json)
}

/// GET /api/fight/get-logs/:fight_id
pub async fn get_fight_logs(Path(raw_id): Path<String>) -> Result<Json<Value>, ApiError> {
    let fight_id = api::parse_fight_id(&raw_id).ok_or_else(ApiError::route_not_found)?;
    Ok(Json(api::fight_logs_payload(fight_id)))
}

pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}
