//! Input validation for configuration requests
//!
//! This module provides the boundary checks applied during request
//! translation, before anything reaches the store.

use crate::error::RequestError;

/// Maximum length for a category name
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Maximum length for a property name
pub const MAX_PROPERTY_NAME_LENGTH: usize = 100;

/// Maximum length for a property value
pub const MAX_PROPERTY_VALUE_LENGTH: usize = 2048;

/// Validate a category name
///
/// Category names must:
/// - Not be empty
/// - Not exceed MAX_CATEGORY_NAME_LENGTH bytes
/// - Contain only alphanumeric characters, dots, hyphens, and underscores
pub fn validate_category_name(name: &str) -> Result<(), RequestError> {
    if name.is_empty() {
        return Err(RequestError::InvalidCategoryName(name.to_string()));
    }
    if name.len() > MAX_CATEGORY_NAME_LENGTH {
        return Err(RequestError::InvalidCategoryName(name.to_string()));
    }
    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_')
    {
        return Err(RequestError::InvalidCategoryName(name.to_string()));
    }
    Ok(())
}

/// Validate a property name (length check only; names may carry any
/// printable shape the owning service chooses)
pub fn validate_property_name(name: &str) -> Result<(), RequestError> {
    if name.is_empty() {
        return Err(RequestError::InvalidPropertyName(name.to_string()));
    }
    if name.len() > MAX_PROPERTY_NAME_LENGTH {
        return Err(RequestError::InvalidPropertyName(name.to_string()));
    }
    Ok(())
}

/// Validate a property value against the stored-size limit
pub fn validate_property_value(name: &str, value: &str) -> Result<(), RequestError> {
    if value.len() > MAX_PROPERTY_VALUE_LENGTH {
        return Err(RequestError::ValueTooLong {
            name: name.to_string(),
        });
    }
    Ok(())
}
