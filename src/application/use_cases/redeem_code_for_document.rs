//! Access code redemption.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::repositories::{AccessCodeRepository, DocumentRepository};
use crate::domain::services::Clock;
use crate::error::AppError;

/// Read-only view of a redeemed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemedDocument {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Exchanges an access code for the contents of its document.
///
/// Performs lookups only; nothing is written.
pub struct RedeemCodeForDocument<D, A>
where
    D: DocumentRepository + ?Sized,
    A: AccessCodeRepository + ?Sized,
{
    access_code_repository: Arc<A>,
    document_repository: Arc<D>,
    clock: Arc<dyn Clock>,
}

impl<D, A> RedeemCodeForDocument<D, A>
where
    D: DocumentRepository + ?Sized,
    A: AccessCodeRepository + ?Sized,
{
    pub fn new(access_code_repository: Arc<A>, document_repository: Arc<D>, clock: Arc<dyn Clock>) -> Self {
        Self {
            access_code_repository,
            document_repository,
            clock,
        }
    }

    /// Looks up `code`, checks expiry and returns the referenced document.
    ///
    /// Surrounding whitespace in `code` is ignored.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `code` is empty or whitespace-only
    /// - [`AppError::NotFound`] ("Access code not found") for an unknown code
    /// - [`AppError::Expired`] if the current instant is after the code's expiry
    /// - [`AppError::NotFound`] ("Document not found") if the code is orphaned
    pub async fn execute(&self, code: &str) -> Result<RedeemedDocument, AppError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::bad_request(
                "Access code is required",
                json!({ "field": "code" }),
            ));
        }

        let access_code = self
            .access_code_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Access code not found", json!({ "code": code })))?;

        let now = self.clock.now();
        if access_code.is_expired(now) {
            debug!(code, expires_at = ?access_code.expires_at(), "Access code expired");
            return Err(AppError::expired(
                "Access code has expired",
                json!({ "code": code, "expires_at": access_code.expires_at() }),
            ));
        }

        let document = self
            .document_repository
            .find_by_id(access_code.document_id())
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Document not found",
                    json!({ "code": code, "document_id": access_code.document_id() }),
                )
            })?;

        info!(document_id = %document.id(), "Access code redeemed");

        Ok(RedeemedDocument {
            title: document.title().to_string(),
            content: document.content().to_string(),
            created_at: document.created_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccessCode, Document};
    use crate::domain::repositories::{MockAccessCodeRepository, MockDocumentRepository};
    use crate::infrastructure::testing::FixedClock;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
    }

    fn document() -> Document {
        Document::new("doc-1", "Test Document", "This is test content", t0()).unwrap()
    }

    fn use_case(
        access_codes: MockAccessCodeRepository,
        documents: MockDocumentRepository,
        now: DateTime<Utc>,
    ) -> RedeemCodeForDocument<MockDocumentRepository, MockAccessCodeRepository> {
        RedeemCodeForDocument::new(
            Arc::new(access_codes),
            Arc::new(documents),
            Arc::new(FixedClock::new(now)),
        )
    }

    fn code_expiring_at(expires_at: Option<DateTime<Utc>>) -> MockAccessCodeRepository {
        let mut access_codes = MockAccessCodeRepository::new();
        access_codes
            .expect_find_by_code()
            .withf(|code| code == "AC000001")
            .returning(move |code| Ok(Some(AccessCode::new(code, "doc-1", expires_at).unwrap())));
        access_codes
    }

    fn stored_document() -> MockDocumentRepository {
        let mut documents = MockDocumentRepository::new();
        documents
            .expect_find_by_id()
            .withf(|id| id == "doc-1")
            .returning(|_| Ok(Some(document())));
        documents
    }

    #[tokio::test]
    async fn test_redeem_success() {
        let service = use_case(code_expiring_at(None), stored_document(), t0());

        let result = service.execute("  AC000001 ").await.unwrap();

        assert_eq!(result.title, "Test Document");
        assert_eq!(result.content, "This is test content");
        assert_eq!(result.created_at, t0());
    }

    #[tokio::test]
    async fn test_redeem_requires_code() {
        let mut access_codes = MockAccessCodeRepository::new();
        access_codes.expect_find_by_code().times(0);

        let service = use_case(access_codes, MockDocumentRepository::new(), t0());
        let err = service.execute("   ").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Access code is required");
    }

    #[tokio::test]
    async fn test_redeem_unknown_code() {
        let mut access_codes = MockAccessCodeRepository::new();
        access_codes.expect_find_by_code().returning(|_| Ok(None));
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_by_id().times(0);

        let service = use_case(access_codes, documents, t0());
        let err = service.execute("UNKNOWN").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Access code not found");
    }

    #[tokio::test]
    async fn test_redeem_at_exact_expiry_succeeds() {
        let expires_at = t0() + Duration::hours(1);
        let service = use_case(
            code_expiring_at(Some(expires_at)),
            stored_document(),
            expires_at,
        );

        assert!(service.execute("AC000001").await.is_ok());
    }

    #[tokio::test]
    async fn test_redeem_after_expiry_fails() {
        let expires_at = t0() + Duration::hours(1);
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_by_id().times(0);

        let service = use_case(
            code_expiring_at(Some(expires_at)),
            documents,
            expires_at + Duration::seconds(1),
        );
        let err = service.execute("AC000001").await.unwrap_err();

        assert!(matches!(err, AppError::Expired { .. }));
        assert_eq!(err.to_string(), "Access code has expired");
    }

    #[tokio::test]
    async fn test_redeem_orphaned_code() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_by_id().returning(|_| Ok(None));

        let service = use_case(code_expiring_at(None), documents, t0());
        let err = service.execute("AC000001").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Document not found");
        assert_eq!(err.details()["document_id"], "doc-1");
    }

    #[tokio::test]
    async fn test_redeem_checks_expiry_before_document() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_by_id().times(0);

        let service = use_case(
            code_expiring_at(Some(t0() - Duration::days(1))),
            documents,
            t0(),
        );
        let err = service.execute("AC000001").await.unwrap_err();

        assert!(matches!(err, AppError::Expired { .. }));
    }
}
