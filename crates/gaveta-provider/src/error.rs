//! Provider error type
//!
//! Everything a provider operation can fail with: denied access, a rejected
//! request, or a storage failure.

use thiserror::Error;

use gaveta_api::RequestError;
use gaveta_common::{Operation, Role};

/// Errors surfaced by provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("role '{role}' is not permitted to {operation} configuration resources")]
    Forbidden { role: Role, operation: Operation },

    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
