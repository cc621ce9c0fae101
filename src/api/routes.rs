//! API route configuration.

use crate::api::handlers::create_document_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Versioned document API, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /v1/documents` - Store a document and issue an access code
pub fn document_routes() -> Router<AppState> {
    Router::new().route("/v1/documents", post(create_document_handler))
}
