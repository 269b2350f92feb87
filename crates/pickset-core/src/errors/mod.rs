use std::error::Error;
use std::path::PathBuf;

use crate::catalog::CatalogError;

/// Shared behavior of every pickset error enum.
pub trait PicksetError: Error + Send + Sync + 'static {
    /// Stable code for logs and scripted callers.
    fn error_code(&self) -> &'static str;

    /// User errors are logged at `warn`, everything else at `error`.
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No config file at '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot resolve the working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Invalid TOML in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid setting {key}: {message}")]
    Setting { key: &'static str, message: String },

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl PicksetError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::Read { .. } => "CONFIG_READ_FAILED",
            ConfigError::WorkingDirectory(_) => "CONFIG_WORKDIR_UNAVAILABLE",
            ConfigError::Parse { .. } => "CONFIG_PARSE_FAILED",
            ConfigError::Setting { .. } => "CONFIG_INVALID_SETTING",
            ConfigError::Catalog(inner) => inner.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(
            self,
            ConfigError::Read { .. } | ConfigError::WorkingDirectory(_)
        )
    }
}
