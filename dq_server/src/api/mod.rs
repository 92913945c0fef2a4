//! HTTP API for the DQ counter web page.
//!
//! # Endpoints Overview
//!
//! - `GET /` - Empty form
//! - `POST /count` - Run a count (form fields `event`, `token`)
//! - `GET /health` - Server health status
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use dq_server::api::{create_router, AppState};
//! use dq_server::config::ServerConfig;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let config = ServerConfig::from_env(None)?;
//! let app = create_router(AppState::new(config));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8501").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod html;
pub mod pages;

use std::sync::Arc;

use axum::{
    Router,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all HTTP handlers.
///
/// Holds configuration only; each count builds its own API client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create the router with all endpoints and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/count", post(pages::count))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint for monitoring.
///
/// ```bash
/// curl http://localhost:8501/health
/// # {"status":"healthy","version":"0.1.0"}
/// ```
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
