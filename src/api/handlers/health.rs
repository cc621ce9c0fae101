//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::{HealthChecks, HealthResponse, ServiceStatus, StorageCheck};
use crate::state::AppState;

/// Reports whether the selected storage backend answers queries.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Storage backend readable
/// - **503 Service Unavailable**: Storage backend failed
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T10:00:00.000Z",
///   "checks": {
///     "storage": { "status": "ok", "backend": "postgres", "documents": 12 }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match state.repositories.documents.count().await {
        Ok(count) => StorageCheck::reachable(state.backend(), count),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            StorageCheck::failed(state.backend(), e)
        }
    };

    let status = storage.status;
    let code = match status {
        ServiceStatus::Ok => StatusCode::OK,
        ServiceStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        checks: HealthChecks { storage },
    };

    (code, Json(response))
}
