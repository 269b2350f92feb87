//! Transfer engine: the only code that moves items between buckets.

use tracing::{debug, warn};

use super::{Selection, TransferError};
use crate::catalog::{CategoryId, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The item was already in the target bucket.
    Unchanged,
}

/// Result of [`Selection::select_all_visible`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Visible available items moved to selected, in catalog order.
    Selected(Vec<ItemId>),
    /// Nothing was visible, so the whole selection was returned.
    Unselected(Vec<ItemId>),
    Unchanged,
}

/// Net membership change of one category after a bulk reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReset {
    pub category: CategoryId,
    /// Items that left the selected bucket, in their old selection order.
    pub unselected: Vec<ItemId>,
    /// Items that entered the selected bucket, in their new selection order.
    pub selected: Vec<ItemId>,
    /// Whether a non-empty query was cleared.
    pub query_cleared: bool,
}

impl CategoryReset {
    pub fn is_empty(&self) -> bool {
        self.unselected.is_empty() && self.selected.is_empty() && !self.query_cleared
    }
}

impl Selection {
    /// Move an available item to the end of the selected bucket.
    ///
    /// Selecting an already selected item is a no-op, which absorbs duplicate
    /// drop and click events.
    pub fn move_to_selected(
        &mut self,
        category: &str,
        item: &str,
    ) -> Result<MoveOutcome, TransferError> {
        self.ensure_item(category, item)?;
        let state = self.state_mut(category)?;

        if state.pair.select(item) {
            debug!(
                event = "core.selection.item_selected",
                category = category,
                item = item
            );
            Ok(MoveOutcome::Moved)
        } else {
            Ok(MoveOutcome::Unchanged)
        }
    }

    /// Return a selected item to the available bucket.
    ///
    /// Visibility is derived from the active query, so the returned item is
    /// immediately hidden if it does not match it.
    pub fn move_to_available(
        &mut self,
        category: &str,
        item: &str,
    ) -> Result<MoveOutcome, TransferError> {
        self.ensure_item(category, item)?;
        let state = self.state_mut(category)?;

        if state.pair.unselect(item) {
            debug!(
                event = "core.selection.item_unselected",
                category = category,
                item = item
            );
            Ok(MoveOutcome::Moved)
        } else {
            Ok(MoveOutcome::Unchanged)
        }
    }

    /// Select every visible available item, preserving catalog order.
    ///
    /// When nothing is visible but the selection is non-empty, unselects
    /// everything instead (the toggle button's "Unselect All" state).
    pub fn select_all_visible(&mut self, category: &str) -> Result<BulkOutcome, TransferError> {
        let visible: Vec<ItemId> = self
            .visible_available(category)?
            .into_iter()
            .map(|item| item.id().clone())
            .collect();

        if !visible.is_empty() {
            let state = self.state_mut(category)?;
            for id in &visible {
                state.pair.select(id.as_str());
            }
            debug!(
                event = "core.selection.all_visible_selected",
                category = category,
                count = visible.len()
            );
            return Ok(BulkOutcome::Selected(visible));
        }

        let unselected = self.unselect_all(category)?;
        if unselected.is_empty() {
            Ok(BulkOutcome::Unchanged)
        } else {
            Ok(BulkOutcome::Unselected(unselected))
        }
    }

    /// Return every selected item to available.
    ///
    /// Returns the ids that moved, in their former selection order.
    pub fn unselect_all(&mut self, category: &str) -> Result<Vec<ItemId>, TransferError> {
        let state = self.state_mut(category)?;
        let ids: Vec<ItemId> = state.pair.selected().cloned().collect();
        for id in &ids {
            state.pair.unselect(id.as_str());
        }

        if !ids.is_empty() {
            debug!(
                event = "core.selection.all_unselected",
                category = category,
                count = ids.len()
            );
        }
        Ok(ids)
    }

    /// Replace a category's selection with `items`, in the given order.
    ///
    /// Ids that are not part of the category are skipped and logged;
    /// repeated ids are selected once.
    pub fn restore(
        &mut self,
        category: &str,
        items: &[ItemId],
    ) -> Result<CategoryReset, TransferError> {
        let known: Vec<ItemId> = {
            let registry = self.category(category)?;
            items
                .iter()
                .filter(|id| {
                    let found = registry.contains(id.as_str());
                    if !found {
                        warn!(
                            event = "core.selection.restore_item_skipped",
                            category = category,
                            item = %id
                        );
                    }
                    found
                })
                .cloned()
                .collect()
        };

        let state = self.state_mut(category)?;
        let before: Vec<ItemId> = state.pair.selected().cloned().collect();
        for id in &before {
            state.pair.unselect(id.as_str());
        }
        for id in &known {
            state.pair.select(id.as_str());
        }
        let after: Vec<ItemId> = state.pair.selected().cloned().collect();

        Ok(CategoryReset {
            category: CategoryId::new(category),
            unselected: before
                .iter()
                .filter(|id| !after.contains(id))
                .cloned()
                .collect(),
            selected: after
                .iter()
                .filter(|id| !before.contains(id))
                .cloned()
                .collect(),
            query_cleared: false,
        })
    }

    /// Unselect everything and clear every query, in all categories.
    ///
    /// Only categories that changed are reported.
    pub fn clear_all(&mut self) -> Vec<CategoryReset> {
        let mut resets = Vec::new();
        for (id, state) in self.states.iter_mut() {
            let unselected: Vec<ItemId> = state.pair.selected().cloned().collect();
            for item in &unselected {
                state.pair.unselect(item.as_str());
            }
            let query_cleared = !state.query.is_empty();
            state.query.clear();

            let reset = CategoryReset {
                category: id.clone(),
                unselected,
                selected: Vec::new(),
                query_cleared,
            };
            if !reset.is_empty() {
                resets.push(reset);
            }
        }

        debug!(
            event = "core.selection.cleared",
            changed_categories = resets.len()
        );
        resets
    }

    /// Clear everything, then re-apply each category's catalog defaults.
    ///
    /// Reports the net change per category relative to the state before the
    /// call.
    pub fn reset_defaults(&mut self) -> Vec<CategoryReset> {
        let mut resets = Vec::new();
        for category in self.catalog.categories() {
            let Some(state) = self.states.get_mut(category.id()) else {
                continue;
            };

            let before: Vec<ItemId> = state.pair.selected().cloned().collect();
            for item in &before {
                state.pair.unselect(item.as_str());
            }
            for default in category.defaults() {
                state.pair.select(default.as_str());
            }
            let query_cleared = !state.query.is_empty();
            state.query.clear();

            let after = category.defaults();
            let reset = CategoryReset {
                category: category.id().clone(),
                unselected: before
                    .iter()
                    .filter(|id| !after.contains(id))
                    .cloned()
                    .collect(),
                selected: after
                    .iter()
                    .filter(|id| !before.contains(id))
                    .cloned()
                    .collect(),
                query_cleared,
            };
            if !reset.is_empty() {
                resets.push(reset);
            }
        }

        debug!(
            event = "core.selection.defaults_restored",
            changed_categories = resets.len()
        );
        resets
    }
}
