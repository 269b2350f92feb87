//! Per-category search filter.
//!
//! Visibility is computed from the stored query each time it is asked for,
//! never cached, so transfers cannot leave a stale visibility flag behind.
//! Filtering never changes bucket membership.

use tracing::debug;

use super::{Selection, TransferError};
use crate::catalog::{Item, normalize_query};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUpdate {
    /// Query after trimming, lower-casing and length capping.
    pub query: String,
    pub changed: bool,
}

/// Whether `item` passes a normalized query. An empty query matches everything.
pub fn matches_query(item: &Item, query: &str) -> bool {
    query.is_empty() || item.search_key().contains(query)
}

impl Selection {
    /// Set the search query of a category.
    pub fn set_query(&mut self, category: &str, query: &str) -> Result<QueryUpdate, TransferError> {
        let normalized = normalize_query(query, self.max_query_chars);
        let state = self.state_mut(category)?;

        let changed = state.query != normalized;
        if changed {
            state.query.clone_from(&normalized);
            debug!(
                event = "core.filter.query_changed",
                category = category,
                query = %normalized
            );
        }

        Ok(QueryUpdate {
            query: normalized,
            changed,
        })
    }

    /// Whether `item` is an available item shown under the category's query.
    ///
    /// Selected items are never "visible" in this sense; they are always
    /// rendered in the selected list regardless of the query.
    pub fn is_visible(&self, category: &str, item: &str) -> Result<bool, TransferError> {
        self.ensure_item(category, item)?;
        let state = self.state(category)?;
        if !state.pair.is_available(item) {
            return Ok(false);
        }
        Ok(self
            .category(category)?
            .item(item)
            .is_some_and(|item| matches_query(item, &state.query)))
    }

    /// Available items passing the active query, in catalog order.
    pub fn visible_available(&self, category: &str) -> Result<Vec<&Item>, TransferError> {
        let registry = self.category(category)?;
        let state = self.state(category)?;
        Ok(registry
            .items()
            .filter(|item| state.pair.is_available(item.id().as_str()))
            .filter(|item| matches_query(item, &state.query))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn visible_ids(selection: &Selection, category: &str) -> Vec<String> {
        selection
            .visible_available(category)
            .unwrap()
            .iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_shows_all_available() {
        let selection = selection();
        assert_eq!(
            visible_ids(&selection, "language"),
            vec!["English", "French", "German"]
        );
    }

    #[test]
    fn test_query_filters_by_substring() {
        let mut selection = selection();
        selection.move_to_selected("language", "English").unwrap();
        let update = selection.set_query("language", "  FR ").unwrap();
        assert_eq!(update.query, "fr");
        assert!(update.changed);

        assert_eq!(visible_ids(&selection, "language"), vec!["French"]);
        assert_eq!(selection.is_visible("language", "German"), Ok(false));
        assert_eq!(selection.is_visible("language", "French"), Ok(true));
        // Selected items are untouched by the filter
        assert_eq!(selected(&selection, "language"), vec!["English"]);
    }

    #[test]
    fn test_query_matches_unanchored() {
        let mut selection = selection();
        selection.set_query("region", "amer").unwrap();
        assert!(visible_ids(&selection, "region").is_empty()); // "na" is selected
        selection.move_to_available("region", "na").unwrap();
        assert_eq!(visible_ids(&selection, "region"), vec!["na"]);
    }

    #[test]
    fn test_set_query_is_idempotent() {
        let mut selection = selection();
        let first = selection.set_query("language", "er").unwrap();
        let visible_once = visible_ids(&selection, "language");

        let second = selection.set_query("language", "er").unwrap();
        assert_eq!(first.query, second.query);
        assert!(!second.changed);
        assert_eq!(visible_ids(&selection, "language"), visible_once);
    }

    #[test]
    fn test_returned_item_honours_active_query() {
        let mut selection = selection();
        selection.select_all_visible("language").unwrap();
        selection.set_query("language", "fr").unwrap();

        selection.move_to_available("language", "German").unwrap();
        assert_eq!(selection.is_visible("language", "German"), Ok(false));

        selection.move_to_available("language", "French").unwrap();
        assert_eq!(selection.is_visible("language", "French"), Ok(true));
    }

    #[test]
    fn test_set_query_does_not_change_membership() {
        let mut selection = selection();
        let before = selection.pair("region").unwrap().clone();
        selection.set_query("region", "europe").unwrap();
        assert_eq!(selection.pair("region").unwrap(), &before);
    }

    #[test]
    fn test_query_unknown_category() {
        let mut selection = selection();
        assert!(matches!(
            selection.set_query("planet", "mars"),
            Err(TransferError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_query_is_capped() {
        let mut selection = selection().with_max_query_chars(3);
        let update = selection.set_query("language", "Germanic").unwrap();
        assert_eq!(update.query, "ger");
        assert_eq!(visible_ids(&selection, "language"), vec!["German"]);
    }
}
