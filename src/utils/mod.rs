//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random access code generation

pub mod code_generator;
