use std::io;

use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;

pub mod api;
pub mod routes;

pub use routes::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server io error: {0}")]
    Io(#[from] io::Error),
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health))
        .route("/api/hello", get(routes::hello))
        .route("/api/fight/get/:fight_id", get(routes::get_fight))
        .route("/api/fight/get-logs/:fight_id", get(routes::get_fight_logs))
        .fallback(routes::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server(config: AppConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("fight bridge listening on http://{}", config.bind_addr);
    tracing::info!(
        "serving fights from {} (scenario: {})",
        config.fight_data_path.display(),
        config
            .scenario_path
            .as_deref()
            .map_or_else(|| "disabled".to_string(), |p| p.display().to_string())
    );

    axum::serve(listener, router(AppState::new(config))).await?;
    Ok(())
}
