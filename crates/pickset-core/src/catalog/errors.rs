use crate::errors::PicksetError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Category id cannot be empty")]
    EmptyCategoryId,

    #[error("Category '{category}' is declared more than once")]
    DuplicateCategory { category: String },

    #[error("Item id cannot be empty (category '{category}')")]
    EmptyItemId { category: String },

    #[error("Item '{item}' is declared more than once in category '{category}'")]
    DuplicateItem { category: String, item: String },

    #[error("Default selection '{item}' is not an item of category '{category}'")]
    UnknownDefault { category: String, item: String },

    #[error("Export parameter '{param}' is used by more than one category")]
    DuplicateParam { param: String },
}

impl PicksetError for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::EmptyCategoryId => "CATALOG_EMPTY_CATEGORY_ID",
            CatalogError::DuplicateCategory { .. } => "CATALOG_DUPLICATE_CATEGORY",
            CatalogError::EmptyItemId { .. } => "CATALOG_EMPTY_ITEM_ID",
            CatalogError::DuplicateItem { .. } => "CATALOG_DUPLICATE_ITEM",
            CatalogError::UnknownDefault { .. } => "CATALOG_UNKNOWN_DEFAULT",
            CatalogError::DuplicateParam { .. } => "CATALOG_DUPLICATE_PARAM",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
