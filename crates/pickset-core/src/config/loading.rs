//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values (no categories)
//! 2. **User config** - `~/.pickset/config.toml` (global user preferences)
//! 3. **Project config** - `./.pickset/config.toml` (project-specific catalog)
//!
//! An explicit file passed with `--config` bypasses the hierarchy.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{EngineConfig, ExportConfig, PicksetConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".pickset";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged result fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PicksetConfig, ConfigError> {
    let mut config = PicksetConfig::default();

    if let Some(path) = user_config_path() {
        match load_config_file(&path) {
            Ok(user_config) => config = merge_configs(config, user_config),
            Err(ConfigError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    let project_path = std::env::current_dir()
        .map_err(ConfigError::WorkingDirectory)?
        .join(CONFIG_DIR)
        .join(CONFIG_FILE);
    match load_config_file(&project_path) {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(ConfigError::NotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    validate_config(&config)?;

    tracing::debug!(
        event = "core.config.hierarchy_loaded",
        category_count = config.categories.len()
    );

    Ok(config)
}

/// Load and validate a single config file, bypassing the hierarchy.
pub fn load_explicit(path: &Path) -> Result<PicksetConfig, ConfigError> {
    let config = load_config_file(path)?;
    validate_config(&config)?;

    tracing::debug!(
        event = "core.config.file_loaded",
        path = %path.display(),
        category_count = config.categories.len()
    );

    Ok(config)
}

/// `~/.pickset/config.toml`, if a home directory exists.
fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read and parse a config file without validating it.
pub fn load_config_file(path: &Path) -> Result<PicksetConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Engine and export settings come from the override when it sets them and
/// from the base otherwise; `strict_references` stays on if either side
/// enables it. Categories are
/// merged by id: an override category replaces the base one in place, new
/// categories are appended.
pub fn merge_configs(base: PicksetConfig, override_config: PicksetConfig) -> PicksetConfig {
    let mut categories = base.categories;
    for category in override_config.categories {
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => categories.push(category),
        }
    }

    PicksetConfig {
        engine: EngineConfig {
            strict_references: override_config.engine.strict_references
                || base.engine.strict_references,
            max_query_chars: override_config
                .engine
                .max_query_chars
                .or(base.engine.max_query_chars),
        },
        export: ExportConfig {
            field: override_config.export.field.or(base.export.field),
            separator: override_config.export.separator.or(base.export.separator),
        },
        categories,
    }
}
