//! Domain model types for the storage abstraction layer
//!
//! These types are used by the storage traits, decoupled from specific
//! backends.

use serde::{Deserialize, Serialize};

/// One stored configuration row: a single property of a category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationEntity {
    pub category_name: String,
    pub property_name: String,
    pub property_value: String,
}

/// How a reconcile treats properties already stored for the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileMode {
    /// Stored properties are replaced wholesale; stale rows are dropped
    Replace,
    /// Submitted properties are upserted; rows not mentioned are kept
    Merge,
}

impl ReconcileMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReconcileMode::Replace => "replace",
            ReconcileMode::Merge => "merge",
        }
    }
}

impl std::fmt::Display for ReconcileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReconcileMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(ReconcileMode::Replace),
            "merge" => Ok(ReconcileMode::Merge),
            _ => Err(format!("Invalid reconcile mode: {}", s)),
        }
    }
}
