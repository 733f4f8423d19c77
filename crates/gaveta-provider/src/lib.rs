//! Gaveta Provider - Role-gated configuration resource management
//!
//! This crate provides:
//! - The `ConfigurationProvider` with create/query/update/delete operations
//! - The authorization gate limiting configuration access to administrators
//! - Request translation from flat property sets to named categories
//! - Change events with an in-process broadcast publisher

pub mod auth;
pub mod error;
pub mod event;
pub mod provider;
pub mod request;

// Re-export commonly used types
pub use error::ProviderError;
pub use event::{BroadcastEventPublisher, ConfigurationChangeEvent, EventPublisher};
pub use provider::ConfigurationProvider;
pub use request::translate_request;
