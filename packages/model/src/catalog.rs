//! Catalog of available snippets.
//!
//! The catalog is owned by the host application; this crate only needs the
//! shape of an entry. Templates are opaque markup text, never parsed beyond
//! locating their opening tag during code generation.

use crate::error::ModelResult;
use serde::{Deserialize, Serialize};

/// A single snippet a user can drop onto the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub template: String,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub category: String,
    pub items: Vec<CatalogItem>,
}

/// Ordered list of categories, each with its ordered items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<CatalogCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<CatalogCategory>) -> Self {
        Self { categories }
    }

    /// Load a catalog from its JSON form: `[{ "category": ..., "items": [...] }]`
    pub fn from_json(source: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn categories(&self) -> impl Iterator<Item = &CatalogCategory> {
        self.categories.iter()
    }

    pub fn items(&self, category: &str) -> &[CatalogItem] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn find(&self, category: &str, name: &str) -> Option<&CatalogItem> {
        self.items(category).iter().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        { "category": "Buttons", "items": [
            { "name": "PrimaryButton", "template": "<button>Click</button>" },
            { "name": "GhostButton", "template": "<button className=\"ghost\">Go</button>" }
        ]},
        { "category": "Headers", "items": [
            { "name": "SimpleHeader", "template": "<h1>Title</h1>" }
        ]}
    ]"#;

    #[test]
    fn test_load_preserves_order() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let names: Vec<_> = catalog.categories().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Buttons", "Headers"]);
        assert_eq!(catalog.items("Buttons")[1].name, "GhostButton");
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::from_json(CATALOG).unwrap();

        let item = catalog.find("Headers", "SimpleHeader").unwrap();
        assert_eq!(item.template, "<h1>Title</h1>");
        assert!(catalog.find("Headers", "PrimaryButton").is_none());
        assert!(catalog.items("Forms").is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
