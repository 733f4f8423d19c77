//! Gaveta Store - Storage abstraction for configuration categories
//!
//! This crate provides:
//! - The `ConfigurationStore` trait with reconcile/find/remove operations
//! - Domain model types for storage rows and reconcile modes
//! - A DashMap-backed in-memory backend

pub mod memory;
pub mod model;
pub mod traits;

// Re-export commonly used types
pub use memory::InMemoryConfigurationStore;
pub use model::{ConfigurationEntity, ReconcileMode};
pub use traits::ConfigurationStore;
