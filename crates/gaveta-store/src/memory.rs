//! In-memory storage backend
//!
//! DashMap-backed implementation for embedded deployments and tests; each
//! category maps to its full property set.

use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::{ConfigurationEntity, ReconcileMode};
use crate::traits::ConfigurationStore;

/// DashMap-backed configuration store.
///
/// Entry locking serializes concurrent reconcile/remove calls on one
/// category while leaving distinct categories independent.
#[derive(Debug, Default)]
pub struct InMemoryConfigurationStore {
    categories: DashMap<String, BTreeMap<String, String>>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories currently stored
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

#[async_trait]
impl ConfigurationStore for InMemoryConfigurationStore {
    async fn reconcile_category(
        &self,
        category: &str,
        properties: &BTreeMap<String, String>,
        mode: ReconcileMode,
    ) -> anyhow::Result<bool> {
        let mut entry = self.categories.entry(category.to_string()).or_default();
        let changed = match mode {
            ReconcileMode::Replace => {
                if *entry == *properties {
                    false
                } else {
                    *entry = properties.clone();
                    true
                }
            }
            ReconcileMode::Merge => {
                let mut changed = false;
                for (name, value) in properties {
                    if entry.get(name) != Some(value) {
                        entry.insert(name.clone(), value.clone());
                        changed = true;
                    }
                }
                changed
            }
        };
        Ok(changed)
    }

    async fn find_by_category(&self, category: &str) -> anyhow::Result<Vec<ConfigurationEntity>> {
        let rows = match self.categories.get(category) {
            Some(entry) => entry
                .iter()
                .map(|(name, value)| ConfigurationEntity {
                    category_name: category.to_string(),
                    property_name: name.clone(),
                    property_value: value.clone(),
                })
                .collect(),
            None => Vec::new(),
        };
        Ok(rows)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ConfigurationEntity>> {
        let mut rows: Vec<ConfigurationEntity> = self
            .categories
            .iter()
            .flat_map(|entry| {
                entry
                    .value()
                    .iter()
                    .map(|(name, value)| ConfigurationEntity {
                        category_name: entry.key().clone(),
                        property_name: name.clone(),
                        property_value: value.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        rows.sort_by(|a, b| {
            (&a.category_name, &a.property_name).cmp(&(&b.category_name, &b.property_name))
        });
        Ok(rows)
    }

    async fn remove_by_category(&self, category: &str) -> anyhow::Result<usize> {
        let removed = self
            .categories
            .remove(category)
            .map(|(_, properties)| properties.len())
            .unwrap_or(0);
        Ok(removed)
    }
}
