//! In-memory implementation of access code repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::AccessCode;
use crate::domain::repositories::AccessCodeRepository;
use crate::error::AppError;

/// Access code storage backed by a process-local map keyed by code.
///
/// Every write takes the same lock, so [`AccessCodeRepository::insert`] is an
/// atomic insert-if-absent.
#[derive(Default)]
pub struct InMemoryAccessCodeRepository {
    access_codes: RwLock<HashMap<String, AccessCode>>,
}

impl InMemoryAccessCodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored access code.
    pub async fn clear(&self) {
        self.access_codes.write().await.clear();
    }
}

/// Orders by `expires_at` ascending with no-expiry first, then by code.
pub(crate) fn sort_by_expiry(codes: &mut [AccessCode]) {
    // `None < Some(_)` for `Option`, which puts never-expiring codes first.
    codes.sort_by(|a, b| {
        a.expires_at()
            .cmp(&b.expires_at())
            .then_with(|| a.code().cmp(b.code()))
    });
}

#[async_trait]
impl AccessCodeRepository for InMemoryAccessCodeRepository {
    async fn save(&self, access_code: AccessCode) -> Result<AccessCode, AppError> {
        self.access_codes
            .write()
            .await
            .insert(access_code.code().to_string(), access_code.clone());
        Ok(access_code)
    }

    async fn insert(&self, access_code: AccessCode) -> Result<AccessCode, AppError> {
        let mut access_codes = self.access_codes.write().await;
        match access_codes.entry(access_code.code().to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Access code already exists",
                json!({ "code": access_code.code() }),
            )),
            Entry::Vacant(slot) => {
                slot.insert(access_code.clone());
                Ok(access_code)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<AccessCode>, AppError> {
        Ok(self.access_codes.read().await.get(code).cloned())
    }

    async fn find_by_document_id(&self, document_id: &str) -> Result<Vec<AccessCode>, AppError> {
        let mut codes: Vec<AccessCode> = self
            .access_codes
            .read()
            .await
            .values()
            .filter(|c| c.document_id() == document_id)
            .cloned()
            .collect();
        sort_by_expiry(&mut codes);
        Ok(codes)
    }

    async fn find_all(&self) -> Result<Vec<AccessCode>, AppError> {
        let mut codes: Vec<AccessCode> = self.access_codes.read().await.values().cloned().collect();
        sort_by_expiry(&mut codes);
        Ok(codes)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.access_codes.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn code(code: &str, document_id: &str, expires_in_hours: Option<i64>) -> AccessCode {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        AccessCode::new(code, document_id, expires_in_hours.map(|h| t0 + Duration::hours(h))).unwrap()
    }

    #[tokio::test]
    async fn test_save_overwrites_same_code() {
        let repo = InMemoryAccessCodeRepository::new();
        repo.save(code("AC1", "doc-1", None)).await.unwrap();
        repo.save(code("AC1", "doc-2", Some(1))).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.find_by_code("AC1").await.unwrap().unwrap();
        assert_eq!(found.document_id(), "doc-2");
        assert!(found.expires_at().is_some());
    }

    #[tokio::test]
    async fn test_insert_rejects_existing_code() {
        let repo = InMemoryAccessCodeRepository::new();
        repo.insert(code("AC1", "doc-1", None)).await.unwrap();

        let err = repo.insert(code("AC1", "doc-2", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        let stored = repo.find_by_code("AC1").await.unwrap().unwrap();
        assert_eq!(stored.document_id(), "doc-1");
    }

    #[tokio::test]
    async fn test_find_by_code_not_found() {
        let repo = InMemoryAccessCodeRepository::new();
        assert!(repo.find_by_code("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_orders_by_expiry_with_none_first() {
        let repo = InMemoryAccessCodeRepository::new();
        repo.save(code("late", "doc-1", Some(5))).await.unwrap();
        repo.save(code("never", "doc-1", None)).await.unwrap();
        repo.save(code("soon", "doc-2", Some(1))).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let codes: Vec<&str> = all.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["never", "soon", "late"]);
    }

    #[tokio::test]
    async fn test_find_by_document_id() {
        let repo = InMemoryAccessCodeRepository::new();
        repo.save(code("b", "doc-1", Some(2))).await.unwrap();
        repo.save(code("a", "doc-1", None)).await.unwrap();
        repo.save(code("c", "doc-2", None)).await.unwrap();

        let codes = repo.find_by_document_id("doc-1").await.unwrap();
        let codes: Vec<&str> = codes.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_only_one_wins() {
        let repo = std::sync::Arc::new(InMemoryAccessCodeRepository::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(code("SAME", &format!("doc-{i}"), None)).await.is_ok()
            }));
        }

        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
