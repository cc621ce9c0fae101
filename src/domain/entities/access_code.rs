//! Access code entity: the short string a reader exchanges for a document.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::AppError;

/// A short code that unlocks one document.
///
/// Uniqueness of `code` is enforced by the repository, not here. The
/// `document_id` is a weak reference; the document may not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCode {
    code: String,
    document_id: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessCode {
    /// Creates an access code after validating its fields.
    ///
    /// `expires_at: None` means the code never expires.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` or `document_id` is empty or
    /// whitespace-only.
    pub fn new(
        code: impl Into<String>,
        document_id: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Self, AppError> {
        let code = code.into();
        let document_id = document_id.into();

        if code.trim().is_empty() {
            return Err(AppError::bad_request(
                "AccessCode code cannot be empty",
                json!({ "field": "code" }),
            ));
        }

        if document_id.trim().is_empty() {
            return Err(AppError::bad_request(
                "AccessCode documentId cannot be empty",
                json!({ "field": "document_id" }),
            ));
        }

        Ok(Self {
            code,
            document_id,
            expires_at,
        })
    }

    /// Parses an RFC 3339 expiry instant coming from outside the process.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `raw` is not a valid instant.
    pub fn parse_expires_at(raw: &str) -> Result<DateTime<Utc>, AppError> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                AppError::bad_request(
                    "AccessCode expiresAt must be a valid date",
                    json!({ "field": "expires_at", "value": raw, "reason": e.to_string() }),
                )
            })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns true if the code has an expiry and `now` is strictly after it.
    ///
    /// A code is still valid at exactly its expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }
}
