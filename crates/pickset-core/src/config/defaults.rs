//! Fallback values for unset config fields, plus the sample catalog used by
//! `pickset --sample`.

use crate::config::types::{
    CategoryConfig, EngineConfig, ExportConfig, ExportField, ItemConfig, PicksetConfig,
};

/// Returns the default query length cap (256 characters).
pub fn default_max_query_chars() -> usize {
    256
}

pub const DEFAULT_SEPARATOR: &str = ",";

impl EngineConfig {
    /// Returns the query length cap, defaulting to 256.
    pub fn max_query_chars(&self) -> usize {
        self.max_query_chars.unwrap_or_else(default_max_query_chars)
    }
}

impl ExportConfig {
    /// Returns the exported item attribute, defaulting to labels.
    pub fn field(&self) -> ExportField {
        self.field.unwrap_or_default()
    }

    /// Returns the value separator, defaulting to `,`.
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }
}

/// The report-header selection page: regions, companies, branches,
/// sub-branches and languages, each with one default pick.
pub fn sample_config() -> PicksetConfig {
    PicksetConfig {
        categories: vec![
            sample_category(
                "region",
                "Region",
                "regions",
                "place",
                &[
                    "North America",
                    "Europe",
                    "Asia Pacific",
                    "Latin America",
                    "Middle East",
                    "Africa",
                ],
            ),
            sample_category(
                "company",
                "Company",
                "companies",
                "domain",
                &[
                    "Acme Corporation",
                    "Globex",
                    "Soylent Corp",
                    "Initech",
                    "Umbrella Corp",
                    "Stark Industries",
                    "Wayne Enterprises",
                    "Cyberdyne Systems",
                    "Oscorp",
                    "LexCorp",
                ],
            ),
            sample_category(
                "branch",
                "Branch",
                "branches",
                "location_city",
                &[
                    "Headquarters",
                    "Regional Office",
                    "Sales Office",
                    "R&D Center",
                    "Manufacturing",
                    "Distribution Center",
                    "Customer Service",
                    "IT Department",
                    "Finance",
                    "Marketing",
                ],
            ),
            sample_category(
                "subbranch",
                "Sub-Branch",
                "subBranches",
                "group",
                &[
                    "Team Alpha",
                    "Team Beta",
                    "Team Gamma",
                    "Team Delta",
                    "Team Epsilon",
                    "Division 1",
                    "Division 2",
                    "Division 3",
                    "Unit A",
                    "Unit B",
                ],
            ),
            CategoryConfig {
                fallback: Some("English".to_string()),
                ..sample_category(
                    "lang",
                    "Language",
                    "languages",
                    "language",
                    &["English", "French", "German", "Spanish", "Hindi"],
                )
            },
        ],
        ..Default::default()
    }
}

/// Items get ids `<prefix>1..n`; the first item is the default pick.
fn sample_category(
    prefix: &str,
    name: &str,
    param: &str,
    icon: &str,
    labels: &[&str],
) -> CategoryConfig {
    let items: Vec<ItemConfig> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| ItemConfig {
            icon: Some(icon.to_string()),
            ..ItemConfig::new(format!("{}{}", prefix, index + 1), *label)
        })
        .collect();

    CategoryConfig {
        id: prefix.to_string(),
        name: Some(name.to_string()),
        param: Some(param.to_string()),
        fallback: None,
        defaults: items.first().map(|item| item.id.clone()).into_iter().collect(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_engine_defaults() {
        let engine = EngineConfig::default();
        assert!(!engine.strict_references);
        assert_eq!(engine.max_query_chars(), 256);

        let export = ExportConfig::default();
        assert_eq!(export.field(), ExportField::Labels);
        assert_eq!(export.separator(), ",");
    }

    #[test]
    fn test_sample_config_builds_catalog() {
        let catalog = Catalog::from_config(&sample_config()).unwrap();
        assert_eq!(catalog.len(), 5);

        let region = catalog.category("region").unwrap();
        assert_eq!(region.param(), "regions");
        assert_eq!(region.defaults()[0].as_str(), "region1");
        assert_eq!(region.item("region1").unwrap().label(), "North America");

        let lang = catalog.category("lang").unwrap();
        assert_eq!(lang.fallback(), Some("English"));
        assert_eq!(lang.item("lang3").unwrap().label(), "German");
    }
}
