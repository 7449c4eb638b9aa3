//! Router configuration and server setup.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // Progress
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/progress/tiers", get(handlers::get_tier_progress))
        .route("/api/radar", get(handlers::get_radar))
        // Catalog
        .route("/api/catalog", get(handlers::get_catalog))
        // Item flags
        .route("/api/items/:id/completed", put(handlers::set_completed))
        .route("/api/items/:id/ignored", put(handlers::set_ignored))
        // Apply middleware
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}
