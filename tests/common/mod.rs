#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use docdrop::infrastructure::persistence::Repositories;
use docdrop::infrastructure::testing::{FixedClock, ScriptedAccessCodeGenerator, SequentialIdGenerator};
use docdrop::state::AppState;

/// State plus handles on the deterministic ports it was built with.
pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
    pub codes: Arc<ScriptedAccessCodeGenerator>,
}

/// 2025-01-01T10:00:00Z, the instant every test clock starts at.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
}

pub fn create_test_context(repositories: Repositories) -> TestContext {
    let clock = Arc::new(FixedClock::new(t0()));
    let codes = Arc::new(ScriptedAccessCodeGenerator::new());

    let state = AppState::new(
        repositories,
        clock.clone(),
        Arc::new(SequentialIdGenerator::new()),
        codes.clone(),
    );

    TestContext {
        state,
        clock,
        codes,
    }
}

/// In-memory repositories with deterministic ports.
pub fn create_test_state() -> TestContext {
    create_test_context(Repositories::in_memory())
}

/// PostgreSQL repositories with deterministic ports.
pub fn create_pg_test_state(pool: PgPool) -> TestContext {
    create_test_context(Repositories::postgres(Arc::new(pool)))
}

pub async fn insert_test_document(pool: &PgPool, id: &str, title: &str, content: &str) {
    sqlx::query("INSERT INTO documents (id, title, content, created_at) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(t0())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_test_code(
    pool: &PgPool,
    code: &str,
    document_id: &str,
    expires_at: Option<DateTime<Utc>>,
) {
    sqlx::query("INSERT INTO access_codes (code, document_id, expires_at) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(document_id)
        .bind(expires_at)
        .execute(pool)
        .await
        .unwrap();
}
