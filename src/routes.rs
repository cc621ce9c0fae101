//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/v1/documents`    - Create a document and issue an access code
//! - `GET  /public/{accessCode}` - Redeem an access code (no authentication)
//! - `GET  /health`              - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{get_document_handler, health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/public/{access_code}", get(get_document_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::document_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
