//! Repository trait for access code storage.

use crate::domain::entities::AccessCode;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for access codes.
///
/// Listings are ordered ascending by `expires_at`, with codes that never
/// expire first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryAccessCodeRepository`]
/// - [`crate::infrastructure::persistence::PgAccessCodeRepository`]
///
/// # Examples
///
/// See integration tests: `tests/repository_access_code.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessCodeRepository: Send + Sync {
    /// Stores an access code, replacing any existing record with the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, access_code: AccessCode) -> Result<AccessCode, AppError>;

    /// Stores a new access code, refusing to overwrite an existing one.
    ///
    /// The existence check and the write are atomic at the storage layer, so
    /// two concurrent inserts of the same code cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, access_code: AccessCode) -> Result<AccessCode, AppError>;

    /// Finds an access code by exact match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(AccessCode))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<AccessCode>, AppError>;

    /// Returns every code pointing at `document_id`, ordered by expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_document_id(&self, document_id: &str) -> Result<Vec<AccessCode>, AppError>;

    /// Returns every stored access code, ordered by expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self) -> Result<Vec<AccessCode>, AppError>;

    /// Counts stored access codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
