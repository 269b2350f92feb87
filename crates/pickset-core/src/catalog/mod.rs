pub mod errors;
pub mod search;
pub mod types;

pub use errors::CatalogError;
pub use search::{normalize_query, normalize_search_key};
pub use types::{Catalog, Category, CategoryId, Item, ItemId};
