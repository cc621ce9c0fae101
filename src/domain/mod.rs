//! Domain layer containing business entities and ports.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. It defines what a document and an access code are, and the
//! contracts storage and runtime collaborators must satisfy.
//!
//! # Architecture
//!
//! - [`entities`] - Immutable value objects with validating constructors
//! - [`repositories`] - Storage-agnostic persistence traits
//! - [`services`] - Clock, id and access code generator ports
//!
//! # Relationship
//!
//! An [`entities::AccessCode`] points at a [`entities::Document`] by id. The
//! reference is lookup-only: a code may outlive its document, and a document
//! may have any number of codes.

pub mod entities;
pub mod repositories;
pub mod services;
