//! In-memory implementation of document repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Document;
use crate::domain::repositories::DocumentRepository;
use crate::error::AppError;

/// Document storage backed by a process-local map.
///
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<String, Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored document.
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save(&self, document: Document) -> Result<Document, AppError> {
        self.documents
            .write()
            .await
            .insert(document.id().to_string(), document.clone());
        Ok(document)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.documents.read().await.len() as i64)
    }
}
