//! Core domain entities.
//!
//! Both entities are immutable once constructed. Constructors validate their
//! inputs and return [`crate::error::AppError::Validation`] instead of
//! producing an invalid instance.
//!
//! - [`Document`] - A titled body of text
//! - [`AccessCode`] - A short code unlocking one document, optionally expiring

pub mod access_code;
pub mod document;

pub use access_code::AccessCode;
pub use document::Document;
