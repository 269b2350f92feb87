//! Application lifecycle and error events.

use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::errors::PicksetError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Log a catalog that is about to back a store.
pub fn log_catalog_loaded(catalog: &Catalog) {
    info!(
        event = "core.catalog.loaded",
        category_count = catalog.len(),
        item_count = catalog.categories().map(|c| c.len()).sum::<usize>()
    );
}

/// Log an error without a code (IO, parsing at the edges).
pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error
    );
}

/// Log a typed error: user errors at `warn`, the rest at `error`.
pub fn log_pickset_error(error: &dyn PicksetError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}
