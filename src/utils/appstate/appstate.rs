use crate::utils::access_token::access_token::Minter;
use crate::utils::config::server_config::ServerConfig;
use crate::utils::rest_handlers::import_history_handler;
use crate::utils::rest_handlers::statement_import_handler;
use crate::utils::rest_handlers::supported_banks_handler;
use axum::extract::DefaultBodyLimit;
use axum::routing::*;
use tokio::sync::Semaphore;

use std::sync::Arc;

pub type SharedState = Arc<AppState>;

// Generous transport ceiling; the 20 MB document limit is enforced by
// upload validation, which must see oversized requests to reject them.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub minter: Minter,
    pub import_limiter: Arc<Semaphore>,
}

pub fn create_app(state: SharedState) -> Router {
    let api_v1 = Router::new()
        .route(
            "/supported_banks",
            get(supported_banks_handler::supported_banks_handler),
        )
        .route(
            "/statement_import",
            post(statement_import_handler::statement_import_handler)
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route(
            "/import_history",
            get(import_history_handler::import_history_handler),
        );
    // Main router
    Router::new()
        .route("/healthcheck", get(health_check))
        .nest("/api/v1", api_v1) // Version 1 of your API
        .fallback(fallback)
        .with_state(state)
}

/// axum handler for any request that fails to match the router routes.
/// This implementation responds with HTTP status code NOT FOUND (404).
pub async fn fallback(uri: axum::http::Uri) -> impl axum::response::IntoResponse {
    eprint!("fallback");
    (axum::http::StatusCode::NOT_FOUND, uri.to_string())
}

pub async fn health_check() -> Result<String, axum::http::StatusCode> {
    Ok("Health : Ok".into())
}
