use crate::errors::PicksetError;
use crate::selection::TransferError;

/// Only produced when `engine.strict_references` is enabled; in the default
/// mode unknown references are logged and ignored.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl PicksetError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Transfer(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Transfer(e) => e.is_user_error(),
        }
    }
}
