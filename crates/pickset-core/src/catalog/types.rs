use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use super::search::normalize_search_key;
use crate::config::types::{CategoryConfig, PicksetConfig};

/// Stable identifier of an item, unique within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a category (`"region"`, `"language"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A selectable entity. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    search_key: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>, icon: Option<String>) -> Self {
        let label = label.into();
        let search_key = normalize_search_key(&label, icon.as_deref());
        Self {
            id: id.into(),
            label,
            icon,
            search_key,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Normalized label used for substring matching.
    pub fn search_key(&self) -> &str {
        &self.search_key
    }
}

/// The item registry of one category, plus its export metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    param: String,
    fallback: Option<String>,
    items: IndexMap<ItemId, Item>,
    defaults: Vec<ItemId>,
}

impl Category {
    /// Build a category from its config section.
    ///
    /// # Errors
    ///
    /// Returns error if the id is empty, an item id is empty or repeated, or a
    /// default names an item that does not exist.
    pub fn from_config(config: &CategoryConfig) -> Result<Self, CatalogError> {
        let id = config.id.trim();
        if id.is_empty() {
            return Err(CatalogError::EmptyCategoryId);
        }

        let mut items = IndexMap::with_capacity(config.items.len());
        for item in &config.items {
            let item_id = item.id.trim();
            if item_id.is_empty() {
                return Err(CatalogError::EmptyItemId {
                    category: id.to_string(),
                });
            }
            if items.contains_key(item_id) {
                return Err(CatalogError::DuplicateItem {
                    category: id.to_string(),
                    item: item_id.to_string(),
                });
            }
            items.insert(
                ItemId::new(item_id),
                Item::new(item_id, item.label.clone(), item.icon.clone()),
            );
        }

        let mut defaults: Vec<ItemId> = Vec::with_capacity(config.defaults.len());
        for default in &config.defaults {
            let default = default.trim();
            if !items.contains_key(default) {
                return Err(CatalogError::UnknownDefault {
                    category: id.to_string(),
                    item: default.to_string(),
                });
            }
            if !defaults.iter().any(|d| d.as_str() == default) {
                defaults.push(ItemId::new(default));
            }
        }

        Ok(Self {
            id: CategoryId::new(id),
            name: config.name.clone().unwrap_or_else(|| id.to_string()),
            param: config.param.clone().unwrap_or_else(|| id.to_string()),
            fallback: config.fallback.clone(),
            items,
            defaults,
        })
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Display name (defaults to the id).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Export parameter name (defaults to the id).
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Value exported when nothing in this category is selected.
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Items in declaration order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// First item whose label equals `label` exactly.
    pub fn item_by_label(&self, label: &str) -> Option<&Item> {
        self.items.values().find(|item| item.label() == label)
    }

    /// Items pre-seeded into the selected bucket, in declaration order.
    pub fn defaults(&self) -> &[ItemId] {
        &self.defaults
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All categories, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: IndexMap<CategoryId, Category>,
}

impl Catalog {
    /// Build the catalog from the `[[categories]]` sections of a config.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, including category ids or
    /// export parameters declared twice.
    pub fn from_config(config: &PicksetConfig) -> Result<Self, CatalogError> {
        let mut categories = IndexMap::with_capacity(config.categories.len());
        let mut params = HashSet::new();

        for section in &config.categories {
            let category = Category::from_config(section)?;
            if categories.contains_key(category.id()) {
                return Err(CatalogError::DuplicateCategory {
                    category: category.id().to_string(),
                });
            }
            if !params.insert(category.param().to_string()) {
                return Err(CatalogError::DuplicateParam {
                    param: category.param().to_string(),
                });
            }
            categories.insert(category.id().clone(), category);
        }

        Ok(Self { categories })
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Category whose export parameter is `param`.
    pub fn category_by_param(&self, param: &str) -> Option<&Category> {
        self.categories.values().find(|c| c.param() == param)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
