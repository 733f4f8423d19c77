//! Request-level error type
//!
//! Every way a flat property set or a filter predicate can be rejected at
//! the boundary, before anything reaches the store.

use thiserror::Error;

use crate::model::CONFIGURATION_CATEGORY_PROPERTY_ID;
use crate::validation::MAX_PROPERTY_VALUE_LENGTH;

/// Errors raised while translating and validating a request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("property set does not carry the '{}' key", CONFIGURATION_CATEGORY_PROPERTY_ID)]
    MissingCategory,

    #[error("invalid category name: '{0}'")]
    InvalidCategoryName(String),

    #[error("property key '{0}' does not name a property")]
    EmptyPropertyName(String),

    #[error("unrecognized property key: '{0}'")]
    UnrecognizedPropertyKey(String),

    #[error("invalid property name: '{0}'")]
    InvalidPropertyName(String),

    #[error("value of '{0}' is not a text, boolean, or numeric scalar")]
    UnsupportedValue(String),

    #[error("value of property '{name}' exceeds {} bytes", MAX_PROPERTY_VALUE_LENGTH)]
    ValueTooLong { name: String },

    #[error("category '{category}' does not match the request predicate ({predicate})")]
    PredicateMismatch { category: String, predicate: String },

    #[error("predicate '{predicate}' is not supported for {operation} operations")]
    UnsupportedPredicate {
        predicate: String,
        operation: String,
    },
}
