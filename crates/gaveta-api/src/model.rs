//! Boundary models and constants
//!
//! This module defines the property path keys, the flat property-set
//! request shape, filter predicates, and the projected resource shape
//! shared across the provider boundary.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Resource facet keys
pub const CONFIGURATION_RESOURCE_TYPE: &str = "Configuration";
pub const CATEGORY_PROPERTY_NAME: &str = "category";
pub const CONFIGURATION_CATEGORY_PROPERTY_ID: &str = "Configuration/category";
pub const CONFIGURATION_PROPERTIES_PROPERTY_ID: &str = "Configuration/properties";

/// A flat property set as submitted by callers: path keys mapped to raw
/// JSON values.
pub type PropertySet = BTreeMap<String, Value>;

/// Create/update request body carrying one or more flat property sets.
///
/// Each set names one category; several sets may address the same category,
/// in which case their properties are merged during translation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
    pub property_sets: Vec<PropertySet>,
}

impl ResourceRequest {
    pub fn new(property_sets: Vec<PropertySet>) -> Self {
        Self { property_sets }
    }

    /// Appends a flat property set addressing `category`, spelling out the
    /// path keys so callers do not have to.
    pub fn with_category(mut self, category: &str, properties: &BTreeMap<String, String>) -> Self {
        let mut set = PropertySet::new();
        set.insert(
            CONFIGURATION_CATEGORY_PROPERTY_ID.to_string(),
            Value::String(category.to_string()),
        );
        for (name, value) in properties {
            set.insert(
                format!("{}/{}", CONFIGURATION_PROPERTIES_PROPERTY_ID, name),
                Value::String(value.clone()),
            );
        }
        self.property_sets.push(set);
        self
    }
}

/// Filter predicate accepted by query and delete operations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
    /// Matches every configuration category
    Any,
    /// Matches the single category with the given name
    CategoryEquals(String),
}

impl Predicate {
    pub fn category_equals(name: impl Into<String>) -> Self {
        Predicate::CategoryEquals(name.into())
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::CategoryEquals(name) => name == category,
        }
    }

    /// The category a `CategoryEquals` predicate names, if any
    pub fn category(&self) -> Option<&str> {
        match self {
            Predicate::Any => None,
            Predicate::CategoryEquals(name) => Some(name),
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Any => write!(f, "*"),
            Predicate::CategoryEquals(name) => write!(f, "category = '{}'", name),
        }
    }
}

/// Read request naming the property paths to project.
///
/// `property_ids: None` selects everything; an explicit set keeps only the
/// entries it names, where an id selects its own path and every path below
/// it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub property_ids: Option<BTreeSet<String>>,
}

impl QueryRequest {
    /// Selects every property of every matched resource
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_property_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            property_ids: Some(ids.into_iter().map(Into::into).collect()),
        }
    }
}

/// A named configuration category and its properties, the normalized form
/// produced by request translation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationCategory {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}

impl ConfigurationCategory {
    pub fn new(name: impl Into<String>, properties: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }
}

/// Query result resource: facet keys mapped to their entries.
///
/// Every matched category projects two facets, the identity facet under
/// `Configuration` holding the `category` entry and the property facet
/// under `Configuration/properties` holding the stored properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectedResource {
    facets: BTreeMap<String, BTreeMap<String, String>>,
}

impl ProjectedResource {
    pub fn new(category: &str, properties: BTreeMap<String, String>) -> Self {
        let mut identity = BTreeMap::new();
        identity.insert(CATEGORY_PROPERTY_NAME.to_string(), category.to_string());

        let mut facets = BTreeMap::new();
        facets.insert(CONFIGURATION_RESOURCE_TYPE.to_string(), identity);
        facets.insert(CONFIGURATION_PROPERTIES_PROPERTY_ID.to_string(), properties);
        Self { facets }
    }

    /// The category named by the identity facet, when still projected
    pub fn category(&self) -> Option<&str> {
        self.facets
            .get(CONFIGURATION_RESOURCE_TYPE)?
            .get(CATEGORY_PROPERTY_NAME)
            .map(String::as_str)
    }

    /// The property facet, when still projected
    pub fn properties(&self) -> Option<&BTreeMap<String, String>> {
        self.facets.get(CONFIGURATION_PROPERTIES_PROPERTY_ID)
    }

    pub fn facets(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.facets
    }

    /// Drops every entry not named by `property_ids`.
    ///
    /// A requested id keeps an entry when it equals the entry path
    /// (`<facet>/<entry>`) or names one of its ancestors. Facets left empty
    /// are dropped entirely.
    pub fn retain_requested(&mut self, property_ids: &BTreeSet<String>) {
        for (facet, entries) in self.facets.iter_mut() {
            entries.retain(|name, _| {
                let path = format!("{}/{}", facet, name);
                property_ids
                    .iter()
                    .any(|id| path == *id || path.starts_with(&format!("{}/", id)))
            });
        }
        self.facets.retain(|_, entries| !entries.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resource() -> ProjectedResource {
        let mut properties = BTreeMap::new();
        properties.insert("property1".to_string(), "value1".to_string());
        properties.insert("property2".to_string(), "value2".to_string());
        ProjectedResource::new("test-category", properties)
    }

    #[test]
    fn test_predicate() {
        let predicate = Predicate::category_equals("ldap-configuration");
        assert!(predicate.matches("ldap-configuration"));
        assert!(!predicate.matches("sso-configuration"));
        assert_eq!(predicate.category(), Some("ldap-configuration"));
        assert_eq!(predicate.to_string(), "category = 'ldap-configuration'");

        assert!(Predicate::Any.matches("anything"));
        assert_eq!(Predicate::Any.category(), None);
        assert_eq!(Predicate::Any.to_string(), "*");
    }

    #[test]
    fn test_resource_request_with_category() {
        let mut properties = BTreeMap::new();
        properties.insert("a".to_string(), "1".to_string());

        let request = ResourceRequest::default().with_category("test-category", &properties);
        assert_eq!(request.property_sets.len(), 1);

        let set = &request.property_sets[0];
        assert_eq!(
            set.get(CONFIGURATION_CATEGORY_PROPERTY_ID),
            Some(&Value::String("test-category".to_string()))
        );
        assert_eq!(
            set.get("Configuration/properties/a"),
            Some(&Value::String("1".to_string()))
        );
    }

    #[test]
    fn test_projected_resource_facets() {
        let resource = sample_resource();
        assert_eq!(resource.facets().len(), 2);
        assert_eq!(resource.category(), Some("test-category"));
        assert_eq!(
            resource.properties().and_then(|p| p.get("property1")),
            Some(&"value1".to_string())
        );
    }

    #[test]
    fn test_retain_requested_leaf() {
        let mut resource = sample_resource();
        let ids = BTreeSet::from(["Configuration/properties/property1".to_string()]);
        resource.retain_requested(&ids);

        assert_eq!(resource.facets().len(), 1);
        assert_eq!(resource.category(), None);
        let properties = resource.properties().unwrap();
        assert_eq!(properties.len(), 1);
        assert!(properties.contains_key("property1"));
    }

    #[test]
    fn test_retain_requested_container() {
        let mut resource = sample_resource();
        let ids = BTreeSet::from(["Configuration/properties".to_string()]);
        resource.retain_requested(&ids);

        assert_eq!(resource.category(), None);
        assert_eq!(resource.properties().map(BTreeMap::len), Some(2));
    }

    #[test]
    fn test_retain_requested_identity() {
        let mut resource = sample_resource();
        let ids = BTreeSet::from(["Configuration/category".to_string()]);
        resource.retain_requested(&ids);

        assert_eq!(resource.category(), Some("test-category"));
        assert_eq!(resource.properties(), None);
    }
}
