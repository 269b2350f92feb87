use crate::errors::PicksetError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("Category '{category}' not found")]
    UnknownCategory { category: String },

    #[error("Item '{item}' not found in category '{category}'")]
    UnknownItem { category: String, item: String },
}

impl PicksetError for TransferError {
    fn error_code(&self) -> &'static str {
        match self {
            TransferError::UnknownCategory { .. } => "TRANSFER_UNKNOWN_CATEGORY",
            TransferError::UnknownItem { .. } => "TRANSFER_UNKNOWN_ITEM",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("Value '{value}' of '{param}' contains the separator '{separator}'")]
    SeparatorInValue {
        param: String,
        value: String,
        separator: String,
    },
}

impl PicksetError for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            ExportError::SeparatorInValue { .. } => "EXPORT_SEPARATOR_IN_VALUE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
