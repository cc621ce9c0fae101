//! Repository implementations.
//!
//! Two interchangeable backends implement the domain repository traits:
//!
//! - [`InMemoryDocumentRepository`] / [`InMemoryAccessCodeRepository`] -
//!   process-local maps, for development and tests
//! - [`PgDocumentRepository`] / [`PgAccessCodeRepository`] - PostgreSQL via
//!   SQLx, schema managed by the embedded migrations
//!
//! [`Repositories`] picks one backend at process start. Nothing above this
//! module branches on which one is in use.

pub mod memory_access_code_repository;
pub mod memory_document_repository;
pub mod pg_access_code_repository;
pub mod pg_document_repository;

pub use memory_access_code_repository::InMemoryAccessCodeRepository;
pub use memory_document_repository::InMemoryDocumentRepository;
pub use pg_access_code_repository::PgAccessCodeRepository;
pub use pg_document_repository::PgDocumentRepository;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{AccessCodeRepository, DocumentRepository};

/// The repository pair selected for this process.
#[derive(Clone)]
pub struct Repositories {
    pub backend: StorageBackend,
    pub documents: Arc<dyn DocumentRepository>,
    pub access_codes: Arc<dyn AccessCodeRepository>,
}

impl Repositories {
    /// Fresh, empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            documents: Arc::new(InMemoryDocumentRepository::new()),
            access_codes: Arc::new(InMemoryAccessCodeRepository::new()),
        }
    }

    /// PostgreSQL repositories sharing one connection pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            backend: StorageBackend::Postgres,
            documents: Arc::new(PgDocumentRepository::new(pool.clone())),
            access_codes: Arc::new(PgAccessCodeRepository::new(pool)),
        }
    }

    /// Builds the backend named by `config`.
    ///
    /// For PostgreSQL this opens the pool and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn connect(config: &Config) -> Result<Self> {
        match config.storage_backend {
            StorageBackend::Memory => {
                tracing::info!("Storage backend: in-memory (data is not persisted)");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                let database_url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is required for the postgres backend")?;

                let pool = PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                    .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                    .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                    .connect(database_url)
                    .await
                    .context("Failed to connect to database")?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run migrations")?;
                tracing::info!("Migrations applied");

                Ok(Self::postgres(Arc::new(pool)))
            }
        }
    }
}
