//! DTOs for health check endpoint.

use serde::Serialize;

use crate::config::StorageBackend;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    /// RFC 3339 UTC with milliseconds.
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: StorageCheck,
}

/// Result of probing the selected storage backend.
#[derive(Debug, Serialize)]
pub struct StorageCheck {
    pub status: ServiceStatus,
    pub backend: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StorageCheck {
    pub fn reachable(backend: StorageBackend, documents: i64) -> Self {
        Self {
            status: ServiceStatus::Ok,
            backend: backend.to_string(),
            documents: Some(documents),
            error: None,
        }
    }

    pub fn failed(backend: StorageBackend, error: impl ToString) -> Self {
        Self {
            status: ServiceStatus::Degraded,
            backend: backend.to_string(),
            documents: None,
            error: Some(error.to_string()),
        }
    }
}
