//! Authorization gate
//!
//! Every provider operation checks the caller's role before doing anything
//! else; only administrators may manage configuration resources, whatever
//! the operation.

use tracing::debug;

use gaveta_common::{CallerIdentity, Operation, Role};

use crate::error::ProviderError;

/// Ensure `caller` may perform `operation` on configuration resources
pub fn authorize(caller: &CallerIdentity, operation: Operation) -> Result<(), ProviderError> {
    if caller.role == Role::Administrator {
        return Ok(());
    }

    debug!(
        "Authorization failed for user '{}' with role '{}' on {} operation",
        caller.username, caller.role, operation
    );
    Err(ProviderError::Forbidden {
        role: caller.role,
        operation,
    })
}
