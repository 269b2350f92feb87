use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::catalog::ItemId;

/// One side of a category's partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Available,
    Selected,
}

impl Bucket {
    pub fn other(self) -> Self {
        match self {
            Bucket::Available => Bucket::Selected,
            Bucket::Selected => Bucket::Available,
        }
    }
}

/// The `available` / `selected` partition of one category.
///
/// Every item of the category lives in exactly one of the two sets.
/// `selected` keeps insertion order; `available` is a membership set and is
/// rendered in catalog order by the view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketPair {
    available: IndexSet<ItemId>,
    selected: IndexSet<ItemId>,
}

impl BucketPair {
    /// All `items` start available.
    pub fn new<I: IntoIterator<Item = ItemId>>(items: I) -> Self {
        Self {
            available: items.into_iter().collect(),
            selected: IndexSet::new(),
        }
    }

    pub fn bucket_of(&self, item: &str) -> Option<Bucket> {
        if self.selected.contains(item) {
            Some(Bucket::Selected)
        } else if self.available.contains(item) {
            Some(Bucket::Available)
        } else {
            None
        }
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.contains(item)
    }

    pub fn is_available(&self, item: &str) -> bool {
        self.available.contains(item)
    }

    /// Selected ids in selection order.
    pub fn selected(&self) -> impl Iterator<Item = &ItemId> {
        self.selected.iter()
    }

    pub fn available(&self) -> impl Iterator<Item = &ItemId> {
        self.available.iter()
    }

    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// Move `item` from available to the end of selected.
    ///
    /// Returns false (and changes nothing) unless the item was available.
    pub(crate) fn select(&mut self, item: &str) -> bool {
        match self.available.shift_remove_full(item) {
            Some((_, id)) => {
                self.selected.insert(id);
                true
            }
            None => false,
        }
    }

    /// Move `item` from selected back to available.
    ///
    /// Returns false (and changes nothing) unless the item was selected.
    pub(crate) fn unselect(&mut self, item: &str) -> bool {
        match self.selected.shift_remove_full(item) {
            Some((_, id)) => {
                self.available.insert(id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> BucketPair {
        BucketPair::new(["en", "fr", "de"].map(ItemId::new))
    }

    #[test]
    fn test_new_pair_is_all_available() {
        let pair = pair();
        assert_eq!(pair.available_len(), 3);
        assert_eq!(pair.selected_len(), 0);
        assert_eq!(pair.bucket_of("fr"), Some(Bucket::Available));
        assert_eq!(pair.bucket_of("es"), None);
    }

    #[test]
    fn test_select_appends_in_order() {
        let mut pair = pair();
        assert!(pair.select("de"));
        assert!(pair.select("en"));
        let selected: Vec<&str> = pair.selected().map(ItemId::as_str).collect();
        assert_eq!(selected, vec!["de", "en"]);
        assert_eq!(pair.bucket_of("de"), Some(Bucket::Selected));
        assert!(!pair.is_available("de"));
    }

    #[test]
    fn test_select_twice_is_noop() {
        let mut pair = pair();
        assert!(pair.select("en"));
        assert!(!pair.select("en"));
        assert_eq!(pair.selected_len(), 1);
        assert_eq!(pair.available_len(), 2);
    }

    #[test]
    fn test_unselect_returns_item() {
        let mut pair = pair();
        pair.select("en");
        assert!(pair.unselect("en"));
        assert!(!pair.unselect("en"));
        assert_eq!(pair.bucket_of("en"), Some(Bucket::Available));
        assert_eq!(pair.available_len(), 3);
    }

    #[test]
    fn test_unknown_item_is_noop() {
        let mut pair = pair();
        assert!(!pair.select("es"));
        assert!(!pair.unselect("es"));
        assert_eq!(pair, self::pair());
    }

    #[test]
    fn test_bucket_other() {
        assert_eq!(Bucket::Available.other(), Bucket::Selected);
        assert_eq!(Bucket::Selected.other(), Bucket::Available);
    }
}
