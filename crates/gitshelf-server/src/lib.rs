//! Gitshelf HTTP API Server
//!
//! Provides REST API endpoints for listing, creating, updating, deleting
//! and liking cataloged repository records. All state is process-local and
//! discarded on shutdown.

use std::sync::Arc;

use axum::{Router, response::Json, routing::get};
use gitshelf::Catalog;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use config::ServerConfig;
use error::Result;

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: ServerConfig,
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // API routes
        .merge(routes::repositories::router())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Result<Json<Value>> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "gitshelf-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": time::OffsetDateTime::now_utc()
    })))
}
