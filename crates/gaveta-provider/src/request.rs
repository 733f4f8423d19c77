//! Request translation
//!
//! Turns flat property sets into normalized configuration categories,
//! validating every key and value on the way. Nothing reaches the store
//! until the whole request has translated cleanly.

use std::collections::BTreeMap;

use serde_json::Value;

use gaveta_api::{
    CONFIGURATION_CATEGORY_PROPERTY_ID, CONFIGURATION_PROPERTIES_PROPERTY_ID,
    ConfigurationCategory, PropertySet, RequestError, ResourceRequest, validate_category_name,
    validate_property_name, validate_property_value,
};

/// Translate a request body into categories ready for reconciliation.
///
/// Property sets addressing the same category are merged, later sets
/// winning on overlapping names. Categories come back ordered by name, so
/// multi-category requests reconcile in a stable order.
pub fn translate_request(
    request: &ResourceRequest,
) -> Result<Vec<ConfigurationCategory>, RequestError> {
    let mut categories: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();

    for set in &request.property_sets {
        let (name, properties) = translate_property_set(set)?;
        categories.entry(name).or_default().extend(properties);
    }

    Ok(categories
        .into_iter()
        .map(|(name, properties)| ConfigurationCategory::new(name, properties))
        .collect())
}

/// Translate and validate a single flat property set
fn translate_property_set(
    set: &PropertySet,
) -> Result<(String, BTreeMap<String, String>), RequestError> {
    let raw_category = set
        .get(CONFIGURATION_CATEGORY_PROPERTY_ID)
        .ok_or(RequestError::MissingCategory)?;
    let category = coerce_to_text(raw_category).ok_or_else(|| {
        RequestError::UnsupportedValue(CONFIGURATION_CATEGORY_PROPERTY_ID.to_string())
    })?;
    validate_category_name(&category)?;

    let mut properties = BTreeMap::new();
    for (key, value) in set {
        if key == CONFIGURATION_CATEGORY_PROPERTY_ID {
            continue;
        }
        let name = property_name(key)?;
        validate_property_name(name)?;

        let text =
            coerce_to_text(value).ok_or_else(|| RequestError::UnsupportedValue(key.clone()))?;
        validate_property_value(name, &text)?;
        properties.insert(name.to_string(), text);
    }

    Ok((category, properties))
}

/// Extract the property name from a `Configuration/properties/...` key
fn property_name(key: &str) -> Result<&str, RequestError> {
    if key == CONFIGURATION_PROPERTIES_PROPERTY_ID {
        return Err(RequestError::EmptyPropertyName(key.to_string()));
    }
    match key
        .strip_prefix(CONFIGURATION_PROPERTIES_PROPERTY_ID)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        Some(name) if !name.is_empty() => Ok(name),
        Some(_) => Err(RequestError::EmptyPropertyName(key.to_string())),
        None => Err(RequestError::UnrecognizedPropertyKey(key.to_string())),
    }
}

/// Text coercion for scalar JSON values; null, arrays, and objects have no
/// text form
fn coerce_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
