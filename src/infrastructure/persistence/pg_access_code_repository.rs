//! PostgreSQL implementation of access code repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::AccessCode;
use crate::domain::repositories::AccessCodeRepository;
use crate::error::AppError;

/// PostgreSQL repository for access codes.
///
/// `code` is the primary key of `access_codes`, so uniqueness holds across
/// every process sharing the database. `document_id` carries no foreign key:
/// a code may outlive its document.
pub struct PgAccessCodeRepository {
    pool: Arc<PgPool>,
}

impl PgAccessCodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccessCodeRow {
    code: String,
    document_id: String,
    expires_at: Option<DateTime<Utc>>,
}

impl TryFrom<AccessCodeRow> for AccessCode {
    type Error = AppError;

    fn try_from(row: AccessCodeRow) -> Result<Self, Self::Error> {
        AccessCode::new(row.code, row.document_id, row.expires_at)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

#[async_trait]
impl AccessCodeRepository for PgAccessCodeRepository {
    async fn save(&self, access_code: AccessCode) -> Result<AccessCode, AppError> {
        sqlx::query(
            r#"
            INSERT INTO access_codes (code, document_id, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO UPDATE
            SET document_id = EXCLUDED.document_id,
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(access_code.code())
        .bind(access_code.document_id())
        .bind(access_code.expires_at())
        .execute(self.pool.as_ref())
        .await?;

        Ok(access_code)
    }

    async fn insert(&self, access_code: AccessCode) -> Result<AccessCode, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO access_codes (code, document_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(access_code.code())
        .bind(access_code.document_id())
        .bind(access_code.expires_at())
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(_) => Ok(access_code),
            Err(e) if is_unique_violation(&e) => Err(AppError::conflict(
                "Access code already exists",
                json!({ "code": access_code.code() }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<AccessCode>, AppError> {
        let row = sqlx::query_as::<_, AccessCodeRow>(
            r#"
            SELECT code, document_id, expires_at
            FROM access_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(AccessCode::try_from).transpose()
    }

    async fn find_by_document_id(&self, document_id: &str) -> Result<Vec<AccessCode>, AppError> {
        let rows = sqlx::query_as::<_, AccessCodeRow>(
            r#"
            SELECT code, document_id, expires_at
            FROM access_codes
            WHERE document_id = $1
            ORDER BY expires_at ASC NULLS FIRST, code ASC
            "#,
        )
        .bind(document_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(AccessCode::try_from).collect()
    }

    async fn find_all(&self) -> Result<Vec<AccessCode>, AppError> {
        let rows = sqlx::query_as::<_, AccessCodeRow>(
            r#"
            SELECT code, document_id, expires_at
            FROM access_codes
            ORDER BY expires_at ASC NULLS FIRST, code ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(AccessCode::try_from).collect()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM access_codes")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
