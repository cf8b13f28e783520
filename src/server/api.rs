use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::data::{load_raw_fight, load_scenario, SourceError};
use crate::fight::{FightProjector, FightResponse};

/// Errors surfaced to API callers as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn route_not_found() -> Self {
        Self::NotFound("Route not found".to_string())
    }
}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        if err.is_not_found() {
            tracing::warn!("{err}");
            Self::NotFound(err.to_string())
        } else {
            tracing::error!("fight projection failed: {err:?}");
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub fn health_payload(config: &AppConfig) -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "message": format!("Fight bridge API is running on {}", config.bind_addr),
    })
}

pub fn hello_payload() -> serde_json::Value {
    serde_json::json!({ "message": "Hello from the fight bridge API!" })
}

/// Fight logs are not produced by the generator; clients get an empty object.
pub fn fight_logs_payload(_fight_id: u64) -> serde_json::Value {
    serde_json::json!({})
}

/// Read the raw fight (required) and scenario (best effort) and project them.
/// Both files are read fresh on every call.
pub fn fight_payload(config: &AppConfig, fight_id: u64) -> Result<FightResponse, ApiError> {
    let raw = load_raw_fight(&config.fight_data_path)?;
    let scenario = config
        .scenario_path
        .as_deref()
        .and_then(|path| load_scenario(path));

    let projector = FightProjector::new(config.defaults.clone());
    let response = projector.project(fight_id, &raw, scenario.as_ref());

    tracing::info!(
        fight_id,
        source = %config.fight_data_path.display(),
        scenario = scenario.is_some(),
        leeks1 = response.leeks1.len(),
        leeks2 = response.leeks2.len(),
        "generated fight response"
    );
    Ok(response)
}

/// Parse a fight id path segment. Only positive integers name a fight.
pub fn parse_fight_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}
