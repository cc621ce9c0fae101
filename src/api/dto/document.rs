//! DTOs for document creation and public retrieval.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::{CreateDocumentInput, CreateDocumentOutput, RedeemedDocument};

/// Request to store a document and issue an access code.
///
/// Missing `title` or `content` deserialize as empty strings so they are
/// reported as validation errors rather than body parse failures.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "content should not be empty"))]
    pub content: String,

    /// Lifetime of the access code in seconds.
    #[validate(range(min = 1, message = "expiresIn must be a positive integer"))]
    pub expires_in: Option<i64>,
}

impl From<CreateDocumentRequest> for CreateDocumentInput {
    fn from(request: CreateDocumentRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            expires_in: request.expires_in,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentResponse {
    pub id: String,
    pub access_code: String,
}

impl From<CreateDocumentOutput> for CreateDocumentResponse {
    fn from(output: CreateDocumentOutput) -> Self {
        Self {
            id: output.id,
            access_code: output.access_code,
        }
    }
}

/// Public view of a document, `createdAt` in RFC 3339 UTC with milliseconds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocumentResponse {
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<RedeemedDocument> for GetDocumentResponse {
    fn from(document: RedeemedDocument) -> Self {
        Self {
            title: document.title,
            content: document.content,
            created_at: document.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
