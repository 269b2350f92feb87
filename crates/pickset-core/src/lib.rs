//! pickset-core: dual-list item transfer and live-filter engine
//!
//! Each category of a catalog splits its items between an `available` and a
//! `selected` bucket. Items move between the buckets by click, bulk toggle or
//! drag and drop, while a per-category search query filters the available
//! list and highlights matches.
//!
//! # Main Entry Points
//!
//! - [`config`] - Catalog and engine configuration
//! - [`catalog`] - Immutable item registry built from configuration
//! - [`selection`] - Bucket pairs, transfers, filtering, summaries, export
//! - [`state`] - Command dispatch through [`CoreStore`]

pub mod catalog;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod selection;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Catalog, CatalogError, Category, CategoryId, Item, ItemId};
pub use config::PicksetConfig;
pub use errors::{ConfigError, PicksetError};
pub use selection::{
    Bucket, BucketPair, CategoryView, DragState, DropTarget, ExportError, FormPayload, ItemView,
    Selection, SelectionSummary, ToggleAction, TransferError,
};
pub use state::{Command, CoreStore, DispatchError, Event, Store};

// Re-export logging initialization
pub use logging::init_logging;
