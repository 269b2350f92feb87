//! Drag coordinator.
//!
//! A single drag slot: `Idle -> Dragging -> Idle`. The coordinator only
//! decides whether a drop is a transfer or a cancelled gesture; the store
//! performs the transfer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Bucket;
use crate::catalog::{CategoryId, ItemId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        category: CategoryId,
        item: ItemId,
        source: Bucket,
    },
}

/// Where a dragged item was released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    Bucket { category: CategoryId, bucket: Bucket },
    /// Released outside any bucket.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// A drop arrived with no drag in flight.
    NotDragging,
    Outside,
    /// Items never leave their category.
    CrossCategory,
    /// Released over the bucket it came from.
    SameBucket,
    /// Drag ended without a drop.
    Ended,
    /// A new drag started before the previous one finished.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResolution {
    Transfer {
        category: CategoryId,
        item: ItemId,
        to: Bucket,
    },
    Cancelled(CancelReason),
}

#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Begin dragging `item` out of `source`.
    ///
    /// Returns the previous drag if one was still in flight; it is dropped.
    pub fn start(&mut self, category: CategoryId, item: ItemId, source: Bucket) -> Option<DragState> {
        debug!(
            event = "core.drag.started",
            category = %category,
            item = %item,
            source = ?source
        );
        let previous = std::mem::replace(
            &mut self.state,
            DragState::Dragging {
                category,
                item,
                source,
            },
        );
        match previous {
            DragState::Idle => None,
            stale => Some(stale),
        }
    }

    /// Release the dragged item over `target`. Always returns to `Idle`.
    pub fn drop_on(&mut self, target: &DropTarget) -> DropResolution {
        let resolution = match std::mem::take(&mut self.state) {
            DragState::Idle => DropResolution::Cancelled(CancelReason::NotDragging),
            DragState::Dragging {
                category,
                item,
                source,
            } => match target {
                DropTarget::Outside => DropResolution::Cancelled(CancelReason::Outside),
                DropTarget::Bucket {
                    category: target_category,
                    ..
                } if *target_category != category => {
                    DropResolution::Cancelled(CancelReason::CrossCategory)
                }
                DropTarget::Bucket { bucket, .. } if *bucket == source => {
                    DropResolution::Cancelled(CancelReason::SameBucket)
                }
                DropTarget::Bucket { bucket, .. } => DropResolution::Transfer {
                    category,
                    item,
                    to: *bucket,
                },
            },
        };

        debug!(event = "core.drag.dropped", resolution = ?resolution);
        resolution
    }

    /// Abandon the drag in flight, if any.
    pub fn end(&mut self) -> Option<DragState> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            dragging => {
                debug!(event = "core.drag.ended");
                Some(dragging)
            }
        }
    }
}
