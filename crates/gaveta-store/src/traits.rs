//! Configuration store trait
//!
//! Defines the interface for configuration storage operations.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::model::{ConfigurationEntity, ReconcileMode};

/// Configuration storage operations, keyed by category.
///
/// Implementations must serialize concurrent reconcile/remove calls that
/// address the same category; distinct categories are independent.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Bring the stored category in line with `properties` under the given
    /// mode, creating the category when it does not exist yet. Returns
    /// whether the persisted state changed.
    async fn reconcile_category(
        &self,
        category: &str,
        properties: &BTreeMap<String, String>,
        mode: ReconcileMode,
    ) -> anyhow::Result<bool>;

    /// Rows of a single category, ordered by property name
    async fn find_by_category(&self, category: &str) -> anyhow::Result<Vec<ConfigurationEntity>>;

    /// All rows across categories, ordered by category then property name
    async fn find_all(&self) -> anyhow::Result<Vec<ConfigurationEntity>>;

    /// Remove a category outright, returning the number of rows removed
    async fn remove_by_category(&self, category: &str) -> anyhow::Result<usize>;
}
