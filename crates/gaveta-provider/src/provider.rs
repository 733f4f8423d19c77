//! Configuration provider
//!
//! Orchestrates the four resource operations: authorize the caller,
//! translate the request, reconcile against the store, and publish change
//! events.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use gaveta_api::{
    ConfigurationCategory, Predicate, ProjectedResource, QueryRequest, RequestError,
    ResourceRequest,
};
use gaveta_common::{CallerIdentity, Operation};
use gaveta_store::{ConfigurationStore, ReconcileMode};

use crate::auth::authorize;
use crate::error::ProviderError;
use crate::event::{ConfigurationChangeEvent, EventPublisher};
use crate::request::translate_request;

/// Role-gated CRUD provider for configuration categories
pub struct ConfigurationProvider {
    store: Arc<dyn ConfigurationStore>,
    publisher: Arc<dyn EventPublisher>,
}

impl ConfigurationProvider {
    pub fn new(store: Arc<dyn ConfigurationStore>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { store, publisher }
    }

    /// Create configuration categories from the request's property sets.
    ///
    /// Each category reconciles in replace mode, dropping any previously
    /// stored rows the request no longer mentions, and is announced with a
    /// change event.
    pub async fn create(
        &self,
        caller: &CallerIdentity,
        request: &ResourceRequest,
    ) -> Result<(), ProviderError> {
        authorize(caller, Operation::Create)?;

        let categories = translate_request(request)?;
        self.reconcile_categories(categories, ReconcileMode::Replace)
            .await
    }

    /// Project every category matched by `predicate`, narrowed to the
    /// property ids the request names
    pub async fn query(
        &self,
        caller: &CallerIdentity,
        request: &QueryRequest,
        predicate: &Predicate,
    ) -> Result<Vec<ProjectedResource>, ProviderError> {
        authorize(caller, Operation::Read)?;

        let rows = match predicate.category() {
            Some(category) => self.store.find_by_category(category).await?,
            None => self.store.find_all().await?,
        };

        let mut grouped: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for row in rows {
            grouped
                .entry(row.category_name)
                .or_default()
                .insert(row.property_name, row.property_value);
        }

        let mut resources = Vec::with_capacity(grouped.len());
        for (category, properties) in grouped {
            let mut resource = ProjectedResource::new(&category, properties);
            if let Some(property_ids) = &request.property_ids {
                resource.retain_requested(property_ids);
            }
            resources.push(resource);
        }

        debug!("Query matched {} configuration resources", resources.len());
        Ok(resources)
    }

    /// Update the categories named by the request, merging submitted
    /// properties into the stored state.
    ///
    /// When `predicate` names a category, every category in the request
    /// body must match it.
    pub async fn update(
        &self,
        caller: &CallerIdentity,
        request: &ResourceRequest,
        predicate: &Predicate,
    ) -> Result<(), ProviderError> {
        authorize(caller, Operation::Update)?;

        let categories = translate_request(request)?;
        for category in &categories {
            if !predicate.matches(&category.name) {
                return Err(RequestError::PredicateMismatch {
                    category: category.name.clone(),
                    predicate: predicate.to_string(),
                }
                .into());
            }
        }

        self.reconcile_categories(categories, ReconcileMode::Merge)
            .await
    }

    /// Remove the category named by `predicate` outright, returning the
    /// number of rows removed. A change event fires only when something was
    /// actually removed.
    pub async fn delete(
        &self,
        caller: &CallerIdentity,
        predicate: &Predicate,
    ) -> Result<usize, ProviderError> {
        authorize(caller, Operation::Delete)?;

        let category =
            predicate
                .category()
                .ok_or_else(|| RequestError::UnsupportedPredicate {
                    predicate: predicate.to_string(),
                    operation: Operation::Delete.to_string(),
                })?;

        let removed = self.store.remove_by_category(category).await?;
        if removed > 0 {
            info!(
                "Removed configuration category '{}' ({} rows)",
                category, removed
            );
            self.publisher
                .publish(ConfigurationChangeEvent::new(category));
        }
        Ok(removed)
    }

    /// Reconcile each category in turn, publishing one change event per
    /// successful reconcile. The first storage failure aborts the
    /// remainder; events already published stand.
    async fn reconcile_categories(
        &self,
        categories: Vec<ConfigurationCategory>,
        mode: ReconcileMode,
    ) -> Result<(), ProviderError> {
        for category in categories {
            let changed = self
                .store
                .reconcile_category(&category.name, &category.properties, mode)
                .await?;

            info!(
                "Reconciled configuration category '{}' in {} mode (changed: {})",
                category.name, mode, changed
            );
            self.publisher
                .publish(ConfigurationChangeEvent::new(&category.name));
        }
        Ok(())
    }
}
