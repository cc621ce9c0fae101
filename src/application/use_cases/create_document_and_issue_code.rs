//! Document creation and access code issuance.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{AccessCode, Document};
use crate::domain::repositories::{AccessCodeRepository, DocumentRepository};
use crate::domain::services::{AccessCodeGenerator, Clock, IdGenerator};
use crate::error::AppError;

/// Number of candidate codes tried before creation gives up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Input for [`CreateDocumentAndIssueCode::execute`].
#[derive(Debug, Clone)]
pub struct CreateDocumentInput {
    pub title: String,
    pub content: String,
    /// Lifetime of the issued code in seconds. `None` means it never expires.
    pub expires_in: Option<i64>,
}

/// Result of a successful creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDocumentOutput {
    pub id: String,
    pub access_code: String,
}

/// Stores a new document and issues one access code for it.
///
/// # Code Allocation
///
/// Candidate codes come from the [`AccessCodeGenerator`] and are checked
/// against storage. A candidate that already exists, or that another writer
/// takes between the check and the insert, counts as a collision. After
/// [`MAX_CODE_ATTEMPTS`] collisions the request fails with
/// [`AppError::ResourceExhausted`].
///
/// # Partial Failure
///
/// The document is saved before code allocation starts and is not removed if
/// allocation fails. Such a document has no code and cannot be reached.
pub struct CreateDocumentAndIssueCode<D, A>
where
    D: DocumentRepository + ?Sized,
    A: AccessCodeRepository + ?Sized,
{
    document_repository: Arc<D>,
    access_code_repository: Arc<A>,
    clock: Arc<dyn Clock>,
    id_generator: Arc<dyn IdGenerator>,
    access_code_generator: Arc<dyn AccessCodeGenerator>,
}

impl<D, A> CreateDocumentAndIssueCode<D, A>
where
    D: DocumentRepository + ?Sized,
    A: AccessCodeRepository + ?Sized,
{
    pub fn new(
        document_repository: Arc<D>,
        access_code_repository: Arc<A>,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
        access_code_generator: Arc<dyn AccessCodeGenerator>,
    ) -> Self {
        Self {
            document_repository,
            access_code_repository,
            clock,
            id_generator,
            access_code_generator,
        }
    }

    /// Creates the document and returns its id with the issued code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] before any write if:
    /// - `title` is empty or whitespace-only
    /// - `content` is empty or whitespace-only
    /// - `expires_in` is present and not positive, or too large to represent
    ///
    /// Returns [`AppError::ResourceExhausted`] if no unused code was found.
    /// Repository errors are propagated unchanged.
    pub async fn execute(&self, input: CreateDocumentInput) -> Result<CreateDocumentOutput, AppError> {
        validate_input(&input)?;

        let title = input.title.trim();
        let content = input.content.trim();

        let document_id = self.id_generator.generate();
        let created_at = self.clock.now();
        let expires_at = expiry_from(created_at, input.expires_in)?;

        let document = Document::new(document_id.as_str(), title, content, created_at)?;
        self.document_repository.save(document).await?;
        debug!(document_id = %document_id, "Document saved");

        let access_code = self.issue_unique_code(&document_id, expires_at).await?;

        info!(
            document_id = %document_id,
            expires_at = ?access_code.expires_at(),
            "Issued access code"
        );

        Ok(CreateDocumentOutput {
            id: document_id,
            access_code: access_code.code().to_string(),
        })
    }

    /// Allocates an unused code for `document_id` with collision retry.
    ///
    /// Attempts up to [`MAX_CODE_ATTEMPTS`] times before failing.
    async fn issue_unique_code(
        &self,
        document_id: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<AccessCode, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let candidate = self.access_code_generator.generate();

            if self
                .access_code_repository
                .find_by_code(&candidate)
                .await?
                .is_some()
            {
                warn!(attempt, document_id, "Access code collision");
                continue;
            }

            let access_code = AccessCode::new(candidate, document_id, expires_at)?;
            match self.access_code_repository.insert(access_code).await {
                Ok(saved) => return Ok(saved),
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, document_id, "Access code taken by a concurrent writer");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            document_id,
            attempts = MAX_CODE_ATTEMPTS,
            "Could not allocate a unique access code, document left without a code"
        );

        Err(AppError::resource_exhausted(
            "Failed to generate unique access code after maximum attempts",
            json!({ "attempts": MAX_CODE_ATTEMPTS, "document_id": document_id }),
        ))
    }
}

/// Checks the request in order: title, content, expiration.
fn validate_input(input: &CreateDocumentInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::bad_request(
            "Title cannot be empty",
            json!({ "field": "title" }),
        ));
    }

    if input.content.trim().is_empty() {
        return Err(AppError::bad_request(
            "Content cannot be empty",
            json!({ "field": "content" }),
        ));
    }

    if let Some(expires_in) = input.expires_in
        && expires_in <= 0
    {
        return Err(AppError::bad_request(
            "Expiration time must be positive",
            json!({ "field": "expires_in", "value": expires_in }),
        ));
    }

    Ok(())
}

fn expiry_from(
    created_at: DateTime<Utc>,
    expires_in: Option<i64>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(seconds) = expires_in else {
        return Ok(None);
    };

    Duration::try_seconds(seconds)
        .and_then(|d| created_at.checked_add_signed(d))
        .map(Some)
        .ok_or_else(|| {
            AppError::bad_request(
                "Expiration time is out of range",
                json!({ "field": "expires_in", "value": seconds }),
            )
        })
}
