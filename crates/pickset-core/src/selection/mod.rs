//! The selection engine.
//!
//! [`Selection`] owns the catalog and, for every category, its
//! [`BucketPair`] and active search query. All mutation goes through the
//! transfer and filter methods; views and summaries are recomputed from this
//! state on demand, so nothing rendered can drift from the partition.

pub mod bucket;
pub mod drag;
pub mod errors;
pub mod export;
pub mod filter;
pub mod highlight;
pub mod summary;
pub mod transfer;
pub mod view;

use indexmap::IndexMap;

use crate::catalog::{Catalog, Category, CategoryId};
use crate::config::defaults::default_max_query_chars;

pub use bucket::{Bucket, BucketPair};
pub use drag::{CancelReason, DragCoordinator, DragState, DropResolution, DropTarget};
pub use errors::{ExportError, TransferError};
pub use export::{FormField, FormPayload};
pub use filter::{QueryUpdate, matches_query};
pub use highlight::{Highlighted, highlight, strip_highlight};
pub use summary::{SelectionSummary, ToggleAction};
pub use transfer::{BulkOutcome, CategoryReset, MoveOutcome};
pub use view::{CategoryView, ItemView};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CategoryState {
    pair: BucketPair,
    /// Normalized query; empty means no filter.
    query: String,
}

#[derive(Debug, Clone)]
pub struct Selection {
    catalog: Catalog,
    states: IndexMap<CategoryId, CategoryState>,
    max_query_chars: usize,
}

impl Selection {
    /// Build the engine for `catalog`, seeding each category's defaults.
    pub fn new(catalog: Catalog) -> Self {
        let states = catalog
            .categories()
            .map(|category| (category.id().clone(), seeded_state(category)))
            .collect();

        Self {
            catalog,
            states,
            max_query_chars: default_max_query_chars(),
        }
    }

    /// Cap applied to queries passed to [`Selection::set_query`].
    pub fn with_max_query_chars(mut self, max_query_chars: usize) -> Self {
        self.max_query_chars = max_query_chars.max(1);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pair(&self, category: &str) -> Option<&BucketPair> {
        self.states.get(category).map(|state| &state.pair)
    }

    /// Active normalized query of a category (empty when unfiltered).
    pub fn query(&self, category: &str) -> Option<&str> {
        self.states.get(category).map(|state| state.query.as_str())
    }

    fn category(&self, category: &str) -> Result<&Category, TransferError> {
        self.catalog
            .category(category)
            .ok_or_else(|| TransferError::UnknownCategory {
                category: category.to_string(),
            })
    }

    fn state(&self, category: &str) -> Result<&CategoryState, TransferError> {
        self.states
            .get(category)
            .ok_or_else(|| TransferError::UnknownCategory {
                category: category.to_string(),
            })
    }

    fn state_mut(&mut self, category: &str) -> Result<&mut CategoryState, TransferError> {
        self.states
            .get_mut(category)
            .ok_or_else(|| TransferError::UnknownCategory {
                category: category.to_string(),
            })
    }

    /// Check that `item` belongs to `category`.
    fn ensure_item(&self, category: &str, item: &str) -> Result<(), TransferError> {
        if self.category(category)?.contains(item) {
            Ok(())
        } else {
            Err(TransferError::UnknownItem {
                category: category.to_string(),
                item: item.to_string(),
            })
        }
    }

    /// Which bucket currently holds `item`.
    pub fn bucket_of(&self, category: &str, item: &str) -> Result<Bucket, TransferError> {
        self.ensure_item(category, item)?;
        self.state(category)?
            .pair
            .bucket_of(item)
            .ok_or_else(|| TransferError::UnknownItem {
                category: category.to_string(),
                item: item.to_string(),
            })
    }
}

fn seeded_state(category: &Category) -> CategoryState {
    let mut pair = BucketPair::new(category.items().map(|item| item.id().clone()));
    for default in category.defaults() {
        pair.select(default.as_str());
    }
    CategoryState {
        pair,
        query: String::new(),
    }
}
