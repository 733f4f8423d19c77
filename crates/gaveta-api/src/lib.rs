//! Gaveta API - Boundary models for the configuration provider
//!
//! This crate provides:
//! - Well-known property path keys and the flat property-set request shape
//! - Typed filter predicates for query and delete operations
//! - The projected resource shape returned by queries, with field selection
//! - Input validation utilities and the request-level error type

pub mod error;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use error::*;
pub use model::*;
pub use validation::*;
