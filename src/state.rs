//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::use_cases::{CreateDocumentAndIssueCode, RedeemCodeForDocument};
use crate::config::StorageBackend;
use crate::domain::repositories::{AccessCodeRepository, DocumentRepository};
use crate::domain::services::{AccessCodeGenerator, Clock, IdGenerator};
use crate::infrastructure::persistence::Repositories;
use crate::infrastructure::system::{RandomAccessCodeGenerator, SystemClock, UuidIdGenerator};

/// Create use case over whichever backend was selected at startup.
pub type CreateDocumentUseCase = CreateDocumentAndIssueCode<dyn DocumentRepository, dyn AccessCodeRepository>;

/// Redeem use case over whichever backend was selected at startup.
pub type RedeemCodeUseCase = RedeemCodeForDocument<dyn DocumentRepository, dyn AccessCodeRepository>;

#[derive(Clone)]
pub struct AppState {
    pub create_document: Arc<CreateDocumentUseCase>,
    pub redeem_code: Arc<RedeemCodeUseCase>,
    pub repositories: Repositories,
}

impl AppState {
    /// Wires both use cases to `repositories` and the given runtime ports.
    pub fn new(
        repositories: Repositories,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
        access_code_generator: Arc<dyn AccessCodeGenerator>,
    ) -> Self {
        let create_document = Arc::new(CreateDocumentAndIssueCode::new(
            repositories.documents.clone(),
            repositories.access_codes.clone(),
            clock.clone(),
            id_generator,
            access_code_generator,
        ));
        let redeem_code = Arc::new(RedeemCodeForDocument::new(
            repositories.access_codes.clone(),
            repositories.documents.clone(),
            clock,
        ));

        Self {
            create_document,
            redeem_code,
            repositories,
        }
    }

    /// Production wiring: system clock, UUID ids, random access codes.
    pub fn with_system_ports(repositories: Repositories) -> Self {
        Self::new(
            repositories,
            Arc::new(SystemClock),
            Arc::new(UuidIdGenerator),
            Arc::new(RandomAccessCodeGenerator),
        )
    }

    pub fn backend(&self) -> StorageBackend {
        self.repositories.backend
    }
}
