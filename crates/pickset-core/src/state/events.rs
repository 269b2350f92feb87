use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, ItemId};
use crate::selection::{Bucket, CancelReason};

/// All state changes that can result from a dispatched command.
///
/// Each variant describes _what happened_, not what should happen. Rejected
/// references in strict mode use the `Result` error channel
/// (`Err(DispatchError)`), not the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// An item moved from available to the end of selected.
    ItemSelected { category: CategoryId, item: ItemId },
    /// An item moved from selected back to available.
    ItemUnselected { category: CategoryId, item: ItemId },
    /// A category's normalized query changed.
    QueryChanged { category: CategoryId, query: String },
    /// A drag gesture started.
    DragStarted {
        category: CategoryId,
        item: ItemId,
        source: Bucket,
    },
    /// A drag gesture finished without a transfer.
    DragCancelled { reason: CancelReason },
}

impl Event {
    /// Category whose rendering is affected, if any.
    pub fn category(&self) -> Option<&CategoryId> {
        match self {
            Event::ItemSelected { category, .. }
            | Event::ItemUnselected { category, .. }
            | Event::QueryChanged { category, .. }
            | Event::DragStarted { category, .. } => Some(category),
            Event::DragCancelled { .. } => None,
        }
    }
}
