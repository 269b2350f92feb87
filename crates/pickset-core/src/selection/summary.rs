use serde::{Deserialize, Serialize};

use super::{Selection, TransferError};
use crate::catalog::CategoryId;

/// What the per-category toggle button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    SelectAll,
    UnselectAll,
}

impl ToggleAction {
    /// Derive the button state from the visible-available and selected counts.
    ///
    /// `UnselectAll` only when nothing is visible and something is selected;
    /// otherwise `SelectAll`, which is inert when nothing is visible.
    pub fn derive(visible_count: usize, selected_count: usize) -> Self {
        if visible_count == 0 && selected_count > 0 {
            ToggleAction::UnselectAll
        } else {
            ToggleAction::SelectAll
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToggleAction::SelectAll => "Select All",
            ToggleAction::UnselectAll => "Unselect All",
        }
    }
}

impl std::fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts and toggle state of one category, derived from the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub category: CategoryId,
    pub name: String,
    pub selected_count: usize,
    pub available_count: usize,
    /// Available items passing the active query.
    pub visible_count: usize,
    pub query: String,
    pub toggle: ToggleAction,
    /// False when the toggle would do nothing (no visible and no selected items).
    pub toggle_enabled: bool,
    /// A non-empty query hides every available item.
    pub no_matches: bool,
}

impl Selection {
    pub fn selected_count(&self, category: &str) -> Result<usize, TransferError> {
        Ok(self.state(category)?.pair.selected_len())
    }

    pub fn toggle_action(&self, category: &str) -> Result<ToggleAction, TransferError> {
        let visible = self.visible_available(category)?.len();
        Ok(ToggleAction::derive(visible, self.selected_count(category)?))
    }

    pub fn summary(&self, category: &str) -> Result<SelectionSummary, TransferError> {
        let registry = self.category(category)?;
        let state = self.state(category)?;
        let visible_count = self.visible_available(category)?.len();
        let selected_count = state.pair.selected_len();
        let available_count = state.pair.available_len();

        Ok(SelectionSummary {
            category: registry.id().clone(),
            name: registry.name().to_string(),
            selected_count,
            available_count,
            visible_count,
            query: state.query.clone(),
            toggle: ToggleAction::derive(visible_count, selected_count),
            toggle_enabled: visible_count > 0 || selected_count > 0,
            no_matches: !state.query.is_empty() && available_count > 0 && visible_count == 0,
        })
    }

    /// Summaries of every category, in catalog order.
    pub fn summaries(&self) -> Vec<SelectionSummary> {
        self.catalog
            .categories()
            .filter_map(|category| self.summary(category.id().as_str()).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_toggle_derive() {
        assert_eq!(ToggleAction::derive(2, 0), ToggleAction::SelectAll);
        assert_eq!(ToggleAction::derive(2, 3), ToggleAction::SelectAll);
        assert_eq!(ToggleAction::derive(0, 3), ToggleAction::UnselectAll);
        assert_eq!(ToggleAction::derive(0, 0), ToggleAction::SelectAll);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(ToggleAction::SelectAll.label(), "Select All");
        assert_eq!(ToggleAction::UnselectAll.to_string(), "Unselect All");
    }

    #[test]
    fn test_summary_initial() {
        let selection = selection();
        let summary = selection.summary("region").unwrap();
        assert_eq!(summary.name, "Region");
        assert_eq!(summary.selected_count, 1);
        assert_eq!(summary.available_count, 2);
        assert_eq!(summary.visible_count, 2);
        assert_eq!(summary.toggle, ToggleAction::SelectAll);
        assert!(summary.toggle_enabled);
        assert!(!summary.no_matches);
    }

    #[test]
    fn test_summary_unselect_all_state() {
        let mut selection = selection();
        selection.select_all_visible("language").unwrap();
        let summary = selection.summary("language").unwrap();
        assert_eq!(summary.selected_count, 3);
        assert_eq!(summary.visible_count, 0);
        assert_eq!(summary.toggle, ToggleAction::UnselectAll);
        assert!(!summary.no_matches);
    }

    #[test]
    fn test_summary_no_matches() {
        let mut selection = selection();
        selection.set_query("language", "xyz").unwrap();
        let summary = selection.summary("language").unwrap();
        assert!(summary.no_matches);
        assert_eq!(summary.toggle, ToggleAction::SelectAll);
        assert!(!summary.toggle_enabled);
        assert_eq!(summary.query, "xyz");
    }

    #[test]
    fn test_summaries_in_catalog_order() {
        let selection = selection();
        let ids: Vec<String> = selection
            .summaries()
            .into_iter()
            .map(|s| s.category.to_string())
            .collect();
        assert_eq!(ids, vec!["language", "region"]);
    }

    #[test]
    fn test_summary_unknown_category() {
        let selection = selection();
        assert!(selection.summary("planet").is_err());
        assert!(selection.selected_count("planet").is_err());
    }
}
