use serde::Serialize;

use super::filter::matches_query;
use super::highlight::highlight;
use super::summary::SelectionSummary;
use super::{Selection, TransferError};
use crate::catalog::{Item, ItemId};

/// Render projection of a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub visible: bool,
    /// Label markup with the query match wrapped, when the item is shown and matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
}

/// Render projection of one category: both lists plus the summary.
///
/// Rebuilt from scratch after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    /// Available items in catalog order, including hidden ones.
    pub available: Vec<ItemView>,
    /// Selected items in selection order. Always visible.
    pub selected: Vec<ItemView>,
    pub summary: SelectionSummary,
}

impl CategoryView {
    pub fn visible_available(&self) -> impl Iterator<Item = &ItemView> {
        self.available.iter().filter(|item| item.visible)
    }
}

impl Selection {
    pub fn view(&self, category: &str) -> Result<CategoryView, TransferError> {
        let registry = self.category(category)?;
        let state = self.state(category)?;
        let query = state.query.as_str();

        let available = registry
            .items()
            .filter(|item| state.pair.is_available(item.id().as_str()))
            .map(|item| {
                let visible = matches_query(item, query);
                item_view(item, visible, if visible { query } else { "" })
            })
            .collect();

        let selected = state
            .pair
            .selected()
            .filter_map(|id| registry.item(id.as_str()))
            .map(|item| item_view(item, true, ""))
            .collect();

        Ok(CategoryView {
            available,
            selected,
            summary: self.summary(category)?,
        })
    }
}

fn item_view(item: &Item, visible: bool, query: &str) -> ItemView {
    let highlighted = highlight(item.label(), item.icon(), query);
    ItemView {
        id: item.id().clone(),
        label: item.label().to_string(),
        icon: item.icon().map(str::to_string),
        visible,
        markup: highlighted.matched().map(|_| highlighted.to_markup()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::types::ItemConfig;

    #[test]
    fn test_view_lists_both_buckets() {
        let selection = selection();
        let view = selection.view("region").unwrap();
        let available: Vec<&str> = view.available.iter().map(|i| i.id.as_str()).collect();
        let selected: Vec<&str> = view.selected.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(available, vec!["eu", "apac"]);
        assert_eq!(selected, vec!["na"]);
        assert_eq!(view.summary.selected_count, 1);
    }

    #[test]
    fn test_view_marks_hidden_and_highlights_matches() {
        let mut selection = selection();
        selection.move_to_selected("language", "English").unwrap();
        selection.set_query("language", "fr").unwrap();

        let view = selection.view("language").unwrap();
        let french = view.available.iter().find(|i| i.id.as_str() == "French").unwrap();
        let german = view.available.iter().find(|i| i.id.as_str() == "German").unwrap();
        assert!(french.visible);
        assert_eq!(french.markup.as_deref(), Some("<mark>Fr</mark>ench"));
        assert!(!german.visible);
        assert_eq!(german.markup, None);

        // Selected items are shown regardless of the query
        assert_eq!(view.selected.len(), 1);
        assert!(view.selected[0].visible);
        assert_eq!(view.visible_available().count(), 1);
    }

    #[test]
    fn test_view_highlights_icon_prefixed_label() {
        let mut config = config();
        config.categories[1].items[0] = ItemConfig {
            id: "na".to_string(),
            label: "place North  America".to_string(),
            icon: Some("place".to_string()),
        };
        let mut selection = Selection::new(Catalog::from_config(&config).unwrap());
        selection.move_to_available("region", "na").unwrap();

        selection.set_query("region", "north america").unwrap();
        let view = selection.view("region").unwrap();
        let na = &view.available[0];
        assert!(na.visible);
        assert_eq!(
            na.markup.as_deref(),
            Some("place <mark>North  America</mark>")
        );

        selection.set_query("region", "a").unwrap();
        let view = selection.view("region").unwrap();
        let markups: Vec<Option<&str>> = view
            .available
            .iter()
            .map(|item| item.markup.as_deref())
            .collect();
        assert_eq!(
            markups,
            vec![
                Some("place North  <mark>A</mark>merica"),
                None,
                Some("<mark>A</mark>sia Pacific"),
            ]
        );
    }

    #[test]
    fn test_view_selected_keeps_selection_order() {
        let mut selection = selection();
        selection.move_to_selected("language", "German").unwrap();
        selection.move_to_selected("language", "English").unwrap();
        let view = selection.view("language").unwrap();
        let selected: Vec<&str> = view.selected.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(selected, vec!["German", "English"]);
    }
}
