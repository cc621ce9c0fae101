//! Handler for document creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::document::{CreateDocumentRequest, CreateDocumentResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a document and returns its id with a freshly issued access code.
///
/// # Endpoint
///
/// `POST /api/v1/documents`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Meeting notes",
///   "content": "...",
///   "expiresIn": 3600   // optional, seconds
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": "0b6f...", "accessCode": "Xq3v9Kp2aB-_" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for a malformed body, blank title or content, or a
///   non-positive `expiresIn`
/// - 503 Service Unavailable if no unused access code could be allocated
pub async fn create_document_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateDocumentResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let output = state.create_document.execute(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}
