use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::source::CatalogError;
use crate::Lang;

/// Marks a property that has no default value.
pub const NO_DEFAULT: &str = "-";

/// A value carrying both a Chinese and an English rendering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Bilingual {
    pub zh: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Zh => &self.zh,
            Lang::En => &self.en,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    #[serde(rename = "default")]
    pub default_label: String,
    pub description: Bilingual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    pub id: String,
    pub name: Bilingual,
    pub description: Bilingual,
    pub category: String,
    #[serde(default)]
    pub props: Vec<PropertyRecord>,
    #[serde(rename = "codeExample", default)]
    pub code_example: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub title: String,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

impl CategoryRecord {
    pub fn first_component(&self) -> Option<&ComponentRecord> {
        self.components.first()
    }

    pub fn component(&self, id: &str) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| c.id == id)
    }
}

/// Payload of `GET /components`: either `{"categories": {...}}` or a bare
/// category map. `allComponents` is a flattened copy of the categories and
/// is never read.
#[derive(Debug)]
pub enum CatalogPayload {
    Envelope(IndexMap<String, CategoryRecord>),
    Bare(IndexMap<String, CategoryRecord>),
}

#[derive(Deserialize)]
struct Envelope {
    categories: IndexMap<String, CategoryRecord>,
}

impl CatalogPayload {
    /// Picks the shape by the presence of a `categories` key, then decodes
    /// only that shape so serde's field-level message reaches the caller.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        let parse = |e: serde_json::Error| CatalogError::Parse(e.to_string());
        if value.get("categories").is_some() {
            let envelope: Envelope = serde_json::from_value(value).map_err(parse)?;
            Ok(CatalogPayload::Envelope(envelope.categories))
        } else {
            serde_json::from_value(value).map(CatalogPayload::Bare).map_err(parse)
        }
    }

    pub fn into_categories(self) -> IndexMap<String, CategoryRecord> {
        match self {
            CatalogPayload::Envelope(categories) | CatalogPayload::Bare(categories) => categories,
        }
    }
}

/// The full set of categories for a session. Key order is the payload order.
///
/// Only constructible through [`Catalog::new`], which checks that every
/// component sits under its own category key and that ids are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: IndexMap<String, CategoryRecord>,
}

impl Catalog {
    pub fn new(categories: IndexMap<String, CategoryRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (key, category) in &categories {
            for component in &category.components {
                if component.category != *key {
                    return Err(CatalogError::Invalid(format!(
                        "component '{}' declares category '{}' but is stored under '{}'",
                        component.id, component.category, key
                    )));
                }
                if !seen.insert(component.id.as_str()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate component id '{}'",
                        component.id
                    )));
                }
            }
        }
        Ok(Self { categories })
    }

    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(CatalogPayload::from_value(value)?.into_categories())
    }

    pub fn category(&self, key: &str) -> Option<&CategoryRecord> {
        self.categories.get(key)
    }

    pub fn contains_category(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    pub fn first_category_key(&self) -> Option<&str> {
        self.categories.keys().next().map(String::as_str)
    }

    pub fn category_keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryRecord)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Looks a component up across all categories.
    pub fn find_component(&self, id: &str) -> Option<&ComponentRecord> {
        self.categories.values().find_map(|c| c.component(id))
    }

    pub fn component_count(&self) -> usize {
        self.categories.values().map(|c| c.components.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{component, sample_catalog_json};

    #[test]
    fn test_bilingual_get() {
        let text = Bilingual::new("按钮", "Button");
        assert_eq!(text.get(Lang::Zh), "按钮");
        assert_eq!(text.get(Lang::En), "Button");
    }

    #[test]
    fn test_from_json_envelope_preserves_category_order() {
        let catalog = Catalog::from_json(sample_catalog_json()).unwrap();
        let keys: Vec<&str> = catalog.category_keys().collect();
        assert_eq!(keys, vec!["basic", "layout", "empty"]);
        assert_eq!(catalog.first_category_key(), Some("basic"));
        assert_eq!(catalog.component_count(), 3);
    }

    #[test]
    fn test_from_json_bare_map() {
        let body = r#"{
            "zeta": {"title": "Z", "components": []},
            "alpha": {"title": "A", "components": []}
        }"#;
        let catalog = Catalog::from_json(body).unwrap();
        let keys: Vec<&str> = catalog.category_keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_property_wire_names() {
        let body = r#"{"name":"size","type":"string","default":"middle",
            "description":{"zh":"尺寸","en":"Size"},"options":["large","small"]}"#;
        let prop: PropertyRecord = serde_json::from_str(body).unwrap();
        assert_eq!(prop.type_label, "string");
        assert_eq!(prop.default_label, "middle");
        assert_eq!(prop.options.as_deref(), Some(&["large".to_string(), "small".to_string()][..]));
    }

    #[test]
    fn test_options_absent_is_none() {
        let body = r#"{"name":"onClick","type":"function","default":"-",
            "description":{"zh":"点击事件","en":"Click handler"}}"#;
        let prop: PropertyRecord = serde_json::from_str(body).unwrap();
        assert!(prop.options.is_none());
        assert_eq!(prop.default_label, NO_DEFAULT);
    }

    #[test]
    fn test_rejects_misfiled_component() {
        let mut categories = IndexMap::new();
        categories.insert(
            "basic".to_string(),
            CategoryRecord {
                title: "Basic".to_string(),
                components: vec![component("button", "layout")],
            },
        );
        let err = Catalog::new(categories).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_rejects_duplicate_ids_across_categories() {
        let mut categories = IndexMap::new();
        categories.insert(
            "basic".to_string(),
            CategoryRecord {
                title: "Basic".to_string(),
                components: vec![component("button", "basic")],
            },
        );
        categories.insert(
            "general".to_string(),
            CategoryRecord {
                title: "General".to_string(),
                components: vec![component("button", "general")],
            },
        );
        let err = Catalog::new(categories).unwrap_err();
        assert!(err.to_string().contains("duplicate component id 'button'"));
    }

    #[test]
    fn test_all_components_is_never_decoded() {
        let body = r#"{"categories":{"basic":{"title":"Basic","components":[]}},
            "allComponents":[{"id":"button"}]}"#;
        let catalog = Catalog::from_json(body).unwrap();
        assert_eq!(catalog.category_keys().collect::<Vec<_>>(), vec!["basic"]);
        assert_eq!(catalog.component_count(), 0);
    }

    #[test]
    fn test_parse_error_names_missing_field() {
        let body = r#"{"categories":{"basic":{"title":"Basic","components":[{"id":"button"}]}}}"#;
        match Catalog::from_json(body).unwrap_err() {
            CatalogError::Parse(message) => {
                assert!(message.contains("missing field"), "got {message}");
                assert!(!message.contains("untagged"), "got {message}");
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_map_parse_error_names_missing_field() {
        let body = r#"{"basic":{"components":[]}}"#;
        let err = Catalog::from_json(body).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"), "got {err}");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_find_component_across_categories() {
        let catalog = Catalog::from_json(sample_catalog_json()).unwrap();
        assert_eq!(catalog.find_component("grid").map(|c| c.category.as_str()), Some("layout"));
        assert!(catalog.find_component("missing").is_none());
    }
}
