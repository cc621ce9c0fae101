//! PostgreSQL implementation of document repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Document;
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;

/// PostgreSQL repository for document storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgDocumentRepository {
    pool: Arc<PgPool>,
}

impl PgDocumentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = AppError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Document::new(row.id, row.title, row.content, row.created_at)
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    async fn save(&self, document: Document) -> Result<Document, AppError> {
        sqlx::query(
            r#"
            INSERT INTO documents (id, title, content, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                content = EXCLUDED.content,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(document.id())
        .bind(document.title())
        .bind(document.content())
        .bind(document.created_at())
        .execute(self.pool.as_ref())
        .await?;

        Ok(document)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, title, content, created_at
            FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Document::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, title, content, created_at
            FROM documents
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
