//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL repository implementations
//! - [`system`] - Clock, id and access code generators backed by the OS
//! - [`testing`] - Deterministic doubles for the runtime ports

pub mod persistence;
pub mod system;
pub mod testing;
