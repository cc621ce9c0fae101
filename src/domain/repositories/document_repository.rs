//! Repository trait for document storage.

use crate::domain::entities::Document;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for documents.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryDocumentRepository`]
/// - [`crate::infrastructure::persistence::PgDocumentRepository`]
///
/// # Examples
///
/// See integration tests: `tests/repository_document.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Stores a document, replacing any existing document with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, document: Document) -> Result<Document, AppError>;

    /// Finds a document by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Document))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError>;

    /// Returns every stored document. Ordering is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;

    /// Counts stored documents.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
