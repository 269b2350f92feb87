use tracing::{debug, error, info, warn};

use crate::catalog::{Catalog, CatalogError, CategoryId, ItemId};
use crate::config::types::{EngineConfig, ExportConfig, PicksetConfig};
use crate::errors::PicksetError;
use crate::selection::{
    Bucket, BulkOutcome, CancelReason, CategoryReset, CategoryView, DragCoordinator, DragState,
    DropResolution, ExportError, FormPayload, MoveOutcome, Selection, SelectionSummary,
    TransferError,
};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Default Store implementation that routes commands to the selection engine
/// and the drag coordinator.
///
/// Unknown category or item references are logged and ignored unless
/// `engine.strict_references` is set, in which case they fail the dispatch
/// without touching state.
pub struct CoreStore {
    selection: Selection,
    drag: DragCoordinator,
    engine: EngineConfig,
    export: ExportConfig,
}

impl CoreStore {
    pub fn new(config: &PicksetConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::from_config(config)?;
        Ok(Self::with_selection(
            Selection::new(catalog),
            config.engine.clone(),
            config.export.clone(),
        ))
    }

    pub fn with_selection(selection: Selection, engine: EngineConfig, export: ExportConfig) -> Self {
        Self {
            selection: selection.with_max_query_chars(engine.max_query_chars()),
            drag: DragCoordinator::new(),
            engine,
            export,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn summary(&self, category: &str) -> Result<SelectionSummary, TransferError> {
        self.selection.summary(category)
    }

    pub fn summaries(&self) -> Vec<SelectionSummary> {
        self.selection.summaries()
    }

    pub fn view(&self, category: &str) -> Result<CategoryView, TransferError> {
        self.selection.view(category)
    }

    /// Export the current selection with the configured field and separator.
    pub fn export(&self) -> Result<FormPayload, ExportError> {
        self.selection.export(&self.export)
    }

    /// Exported selection as a form-urlencoded query string.
    pub fn query_string(&self) -> Result<String, ExportError> {
        Ok(self.export()?.to_query_string(self.export.separator()))
    }

    fn transfer(&mut self, category: &str, item: &str, to: Bucket) -> Result<Vec<Event>, DispatchError> {
        let outcome = match to {
            Bucket::Selected => self.selection.move_to_selected(category, item),
            Bucket::Available => self.selection.move_to_available(category, item),
        };

        match lenient(self.engine.strict_references, outcome)? {
            Some(MoveOutcome::Moved) => {
                let (category, item) = (CategoryId::from(category), ItemId::from(item));
                Ok(vec![match to {
                    Bucket::Selected => Event::ItemSelected { category, item },
                    Bucket::Available => Event::ItemUnselected { category, item },
                }])
            }
            Some(MoveOutcome::Unchanged) | None => Ok(Vec::new()),
        }
    }
}

impl Store for CoreStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);
        let strict = self.engine.strict_references;

        let result = match cmd {
            Command::Select { category, item } => {
                self.transfer(category.as_str(), item.as_str(), Bucket::Selected)
            }
            Command::Unselect { category, item } => {
                self.transfer(category.as_str(), item.as_str(), Bucket::Available)
            }
            Command::SetQuery { category, query } => {
                let update = lenient(strict, self.selection.set_query(category.as_str(), &query));
                update.map(|update| match update {
                    Some(update) if update.changed => vec![Event::QueryChanged {
                        category,
                        query: update.query,
                    }],
                    _ => Vec::new(),
                })
            }
            Command::SelectAllVisible { category } => {
                let outcome = lenient(strict, self.selection.select_all_visible(category.as_str()));
                outcome.map(|outcome| match outcome {
                    Some(BulkOutcome::Selected(items)) => items
                        .into_iter()
                        .map(|item| Event::ItemSelected {
                            category: category.clone(),
                            item,
                        })
                        .collect(),
                    Some(BulkOutcome::Unselected(items)) => items
                        .into_iter()
                        .map(|item| Event::ItemUnselected {
                            category: category.clone(),
                            item,
                        })
                        .collect(),
                    Some(BulkOutcome::Unchanged) | None => Vec::new(),
                })
            }
            Command::UnselectAll { category } => {
                let items = lenient(strict, self.selection.unselect_all(category.as_str()));
                items.map(|items| {
                    items
                        .unwrap_or_default()
                        .into_iter()
                        .map(|item| Event::ItemUnselected {
                            category: category.clone(),
                            item,
                        })
                        .collect()
                })
            }
            Command::DragStart { category, item } => {
                let source = self.selection.bucket_of(category.as_str(), item.as_str());
                match lenient(strict, source) {
                    Ok(Some(source)) => {
                        let mut events = Vec::new();
                        if self
                            .drag
                            .start(category.clone(), item.clone(), source)
                            .is_some()
                        {
                            events.push(Event::DragCancelled {
                                reason: CancelReason::Superseded,
                            });
                        }
                        events.push(Event::DragStarted {
                            category,
                            item,
                            source,
                        });
                        Ok(events)
                    }
                    Ok(None) => Ok(Vec::new()),
                    Err(e) => Err(e),
                }
            }
            Command::Drop { target } => match self.drag.drop_on(&target) {
                DropResolution::Transfer { category, item, to } => {
                    self.transfer(category.as_str(), item.as_str(), to)
                }
                DropResolution::Cancelled(CancelReason::NotDragging) => Ok(Vec::new()),
                DropResolution::Cancelled(reason) => Ok(vec![Event::DragCancelled { reason }]),
            },
            Command::DragEnd => Ok(match self.drag.end() {
                Some(_) => vec![Event::DragCancelled {
                    reason: CancelReason::Ended,
                }],
                None => Vec::new(),
            }),
            Command::Restore { category, items } => {
                let reset = lenient(strict, self.selection.restore(category.as_str(), &items));
                reset.map(|reset| reset.map(|r| reset_events(vec![r])).unwrap_or_default())
            }
            Command::RestoreQuery { query } => {
                let payload = FormPayload::parse_query(&query, self.export.separator());
                Ok(reset_events(
                    self.selection.restore_payload(&payload, self.export.field()),
                ))
            }
            Command::ClearAll => Ok(reset_events(self.selection.clear_all())),
            Command::ResetDefaults => Ok(reset_events(self.selection.reset_defaults())),
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}

/// Downgrade a reference error to a logged no-op unless `strict`.
fn lenient<T>(strict: bool, result: Result<T, TransferError>) -> Result<Option<T>, DispatchError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if strict => Err(e.into()),
        Err(e) => {
            warn!(
                event = "core.state.reference_ignored",
                error_code = e.error_code(),
                error = %e
            );
            Ok(None)
        }
    }
}

fn reset_events(resets: Vec<CategoryReset>) -> Vec<Event> {
    let mut events = Vec::new();
    for reset in resets {
        events.extend(reset.unselected.into_iter().map(|item| Event::ItemUnselected {
            category: reset.category.clone(),
            item,
        }));
        events.extend(reset.selected.into_iter().map(|item| Event::ItemSelected {
            category: reset.category.clone(),
            item,
        }));
        if reset.query_cleared {
            events.push(Event::QueryChanged {
                category: reset.category,
                query: String::new(),
            });
        }
    }
    events
}
