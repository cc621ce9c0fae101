//! Document entity: a titled body of text shared through access codes.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::AppError;

/// A stored document.
///
/// Fields are private so a `Document` can only come from [`Document::new`],
/// which rejects blank titles and blank content. "Updates" are modelled by
/// building a new instance and saving it under the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl Document {
    /// Creates a document after validating its fields.
    ///
    /// Values are stored as given; callers that want surrounding whitespace
    /// removed trim before constructing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id`, `title` or `content` is empty
    /// or whitespace-only.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let id = id.into();
        let title = title.into();
        let content = content.into();

        if id.trim().is_empty() {
            return Err(AppError::bad_request(
                "Document id cannot be empty",
                json!({ "field": "id" }),
            ));
        }

        if title.trim().is_empty() {
            return Err(AppError::bad_request(
                "Title cannot be empty",
                json!({ "field": "title" }),
            ));
        }

        if content.trim().is_empty() {
            return Err(AppError::bad_request(
                "Content cannot be empty",
                json!({ "field": "content" }),
            ));
        }

        Ok(Self {
            id,
            title,
            content,
            created_at,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
