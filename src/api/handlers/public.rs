//! Handler for public document retrieval by access code.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::document::GetDocumentResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the document unlocked by an access code.
///
/// # Endpoint
///
/// `GET /public/{access_code}`
///
/// No authentication: possession of the code is the only credential.
///
/// # Response
///
/// ```json
/// {
///   "title": "Meeting notes",
///   "content": "...",
///   "createdAt": "2025-01-01T10:00:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// - 404 Not Found for an unknown code, or a code whose document is gone
/// - 410 Gone if the code has expired
pub async fn get_document_handler(
    Path(access_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GetDocumentResponse>, AppError> {
    let document = state.redeem_code.execute(&access_code).await?;

    Ok(Json(document.into()))
}
