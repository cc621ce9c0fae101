//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod documents;
pub mod health;
pub mod public;

pub use documents::create_document_handler;
pub use health::health_handler;
pub use public::get_document_handler;
