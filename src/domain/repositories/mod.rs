//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage contract shared by every backend:
//!
//! - `save` is an upsert keyed by the entity's natural key (last write wins)
//! - lookups return `Ok(None)` for absence, never an error
//! - each entity type lives in one global namespace
//!
//! # Implementations
//!
//! - `InMemory*Repository` - in-process maps
//! - `Pg*Repository` - PostgreSQL via SQLx
//!
//! Mock implementations are generated with `mockall` for unit tests.

pub mod access_code_repository;
pub mod document_repository;

pub use access_code_repository::AccessCodeRepository;
pub use document_repository::DocumentRepository;

#[cfg(test)]
pub use access_code_repository::MockAccessCodeRepository;
#[cfg(test)]
pub use document_repository::MockDocumentRepository;
