//! Configuration type definitions for pickset.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [engine]
//! strict_references = false
//! max_query_chars = 256
//!
//! [export]
//! field = "labels"
//! separator = ","
//!
//! [[categories]]
//! id = "language"
//! name = "Language"
//! param = "languages"
//! fallback = "English"
//! defaults = ["lang1"]
//! items = [
//!     { id = "lang1", label = "English", icon = "language" },
//!     { id = "lang2", label = "French" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// Everything a `CoreStore` is built from: engine and export settings plus
/// the category catalog. See [`crate::config`] for where files are read.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PicksetConfig {
    /// Transfer engine and filter settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Form payload / query string settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Category registries, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryConfig>,
}

/// Engine behavior settings.
///
/// Unset fields fall back to the next config file down the hierarchy, then
/// to the accessor defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// Surface unknown category/item references as dispatch errors instead of
    /// logging and ignoring them.
    /// Default: false.
    #[serde(default)]
    pub strict_references: bool,

    /// Maximum number of characters kept from a search query.
    /// Default: 256.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_query_chars: Option<usize>,
}

/// Which item attribute is written into the exported payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportField {
    #[default]
    Labels,
    Ids,
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExportConfig {
    /// Item attribute to export.
    /// Default: labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<ExportField>,

    /// Separator joining the values of one category.
    /// Default: ",".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// One `[[categories]]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryConfig {
    /// Unique category id.
    pub id: String,

    /// Display name. Defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Export parameter name. Defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,

    /// Value exported when nothing is selected in this category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    /// Item ids pre-seeded into the selected bucket.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defaults: Vec<String>,

    /// Selectable items, in display order.
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// One selectable item of a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemConfig {
    pub id: String,
    pub label: String,
    /// Icon ligature name, presentation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ItemConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickset_config_serialization() {
        let config = PicksetConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: PicksetConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PicksetConfig = toml::from_str("").unwrap();
        assert!(!config.engine.strict_references);
        assert_eq!(config.engine.max_query_chars, None);
        assert_eq!(config.engine.max_query_chars(), 256);
        assert_eq!(config.export.field(), ExportField::Labels);
        assert_eq!(config.export.separator(), ",");
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_category_config_deserialize() {
        let toml_str = r#"
[export]
field = "ids"
separator = ";"

[[categories]]
id = "region"
param = "regions"
defaults = ["region1"]
items = [
    { id = "region1", label = "North America", icon = "place" },
    { id = "region2", label = "Europe" },
]
"#;
        let config: PicksetConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.export.field, Some(ExportField::Ids));
        assert_eq!(config.export.separator(), ";");
        assert_eq!(config.categories.len(), 1);

        let region = &config.categories[0];
        assert_eq!(region.param.as_deref(), Some("regions"));
        assert_eq!(region.name, None);
        assert_eq!(region.items[0].icon.as_deref(), Some("place"));
        assert_eq!(region.items[1].icon, None);
    }

    #[test]
    fn test_unknown_export_field_fails() {
        let result: Result<PicksetConfig, _> = toml::from_str("[export]\nfield = \"names\"\n");
        assert!(result.is_err());
    }
}
