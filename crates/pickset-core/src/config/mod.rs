//! Catalog and engine configuration.
//!
//! A `PicksetConfig` holds three things: `[engine]` (query cap, strict
//! references), `[export]` (item field and separator for the form payload)
//! and `[[categories]]`, the catalog itself.
//!
//! Files are read from `~/.pickset/config.toml` and then
//! `./.pickset/config.toml`; the project file wins per field and per
//! category id. Missing files are skipped. `--config <path>` reads one file
//! and ignores both.
//!
//! ```rust,no_run
//! use pickset_core::config::PicksetConfig;
//!
//! # fn main() -> Result<(), pickset_core::ConfigError> {
//! let config = PicksetConfig::load_hierarchy()?;
//! for category in &config.categories {
//!     println!("{}: {} items", category.id, category.items.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

use std::path::Path;

use crate::errors::ConfigError;

pub use defaults::sample_config;
pub use types::{CategoryConfig, EngineConfig, ExportConfig, ExportField, ItemConfig, PicksetConfig};
pub use validation::validate_config;

impl PicksetConfig {
    /// Merged user and project config, validated.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// One explicit file, validated.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        loading::load_explicit(path)
    }
}
