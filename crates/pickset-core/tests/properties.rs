use std::collections::HashSet;

use pickset_core::config::{CategoryConfig, ItemConfig, PicksetConfig};
use pickset_core::{
    Bucket, CategoryId, Command, CoreStore, DropTarget, ItemId, Selection, Store,
};
use proptest::prelude::*;

const CATEGORIES: [(&str, &[&str]); 2] = [
    ("language", &["English", "French", "German", "Spanish"]),
    ("region", &["North America", "Europe", "Asia Pacific"]),
];

const QUERIES: [&str; 5] = ["", "e", "fr", "AN", "zzz"];

fn config() -> PicksetConfig {
    let categories = CATEGORIES
        .iter()
        .map(|(id, labels)| CategoryConfig {
            id: id.to_string(),
            name: None,
            param: None,
            fallback: None,
            defaults: vec![labels[0].to_string()],
            items: labels
                .iter()
                .map(|label| ItemConfig::new(*label, *label))
                .collect(),
        })
        .collect();
    PicksetConfig {
        categories,
        ..Default::default()
    }
}

fn category_id(idx: usize) -> CategoryId {
    CategoryId::new(CATEGORIES[idx % CATEGORIES.len()].0)
}

fn item_id(category: usize, item: usize) -> ItemId {
    let labels = CATEGORIES[category % CATEGORIES.len()].1;
    ItemId::new(labels[item % labels.len()])
}

fn bucket(selected: bool) -> Bucket {
    if selected {
        Bucket::Selected
    } else {
        Bucket::Available
    }
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0..2usize, 0..4usize).prop_map(|(c, i)| Command::Select {
            category: category_id(c),
            item: item_id(c, i),
        }),
        (0..2usize, 0..4usize).prop_map(|(c, i)| Command::Unselect {
            category: category_id(c),
            item: item_id(c, i),
        }),
        (0..2usize, 0..QUERIES.len()).prop_map(|(c, q)| Command::SetQuery {
            category: category_id(c),
            query: QUERIES[q].to_string(),
        }),
        (0..2usize).prop_map(|c| Command::SelectAllVisible {
            category: category_id(c),
        }),
        (0..2usize).prop_map(|c| Command::UnselectAll {
            category: category_id(c),
        }),
        (0..2usize, 0..4usize).prop_map(|(c, i)| Command::DragStart {
            category: category_id(c),
            item: item_id(c, i),
        }),
        (0..2usize, any::<bool>()).prop_map(|(c, selected)| Command::Drop {
            target: DropTarget::Bucket {
                category: category_id(c),
                bucket: bucket(selected),
            },
        }),
        Just(Command::Drop {
            target: DropTarget::Outside
        }),
        Just(Command::DragEnd),
        Just(Command::ClearAll),
        Just(Command::ResetDefaults),
    ]
}

fn membership(selection: &Selection, category: &str) -> (HashSet<String>, HashSet<String>) {
    let pair = selection.pair(category).unwrap();
    (
        pair.available().map(|id| id.to_string()).collect(),
        pair.selected().map(|id| id.to_string()).collect(),
    )
}

fn visible(selection: &Selection, category: &str) -> Vec<String> {
    selection
        .view(category)
        .unwrap()
        .visible_available()
        .map(|item| item.id.to_string())
        .collect()
}

fn assert_partition(selection: &Selection) {
    for (category, labels) in CATEGORIES {
        let pair = selection.pair(category).unwrap();
        let selected: Vec<String> = pair.selected().map(|id| id.to_string()).collect();
        let unique: HashSet<&String> = selected.iter().collect();
        assert_eq!(unique.len(), selected.len(), "duplicate in selected");

        let (available, selected) = membership(selection, category);
        assert!(available.is_disjoint(&selected));
        assert_eq!(available.len() + selected.len(), labels.len());
        for label in labels {
            assert!(available.contains(*label) || selected.contains(*label));
        }
    }
}

proptest! {
    #[test]
    fn prop_every_item_in_exactly_one_bucket(
        commands in proptest::collection::vec(command(), 0..60)
    ) {
        let mut store = CoreStore::new(&config()).unwrap();
        for cmd in commands {
            store.dispatch(cmd).unwrap();
            assert_partition(store.selection());
        }
    }

    #[test]
    fn prop_repeated_select_never_duplicates(
        commands in proptest::collection::vec(command(), 0..30),
        c in 0..2usize,
        i in 0..4usize,
    ) {
        let mut store = CoreStore::new(&config()).unwrap();
        for cmd in commands {
            store.dispatch(cmd).unwrap();
        }
        let select = Command::Select { category: category_id(c), item: item_id(c, i) };
        store.dispatch(select.clone()).unwrap();
        let second = store.dispatch(select).unwrap();

        prop_assert!(second.is_empty());
        let category = category_id(c);
        let count = store
            .selection()
            .pair(category.as_str())
            .unwrap()
            .selected()
            .filter(|id| **id == item_id(c, i))
            .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn prop_set_query_is_idempotent_and_keeps_membership(
        commands in proptest::collection::vec(command(), 0..30),
        c in 0..2usize,
        query in "[a-zA-Z ]{0,6}",
    ) {
        let mut store = CoreStore::new(&config()).unwrap();
        for cmd in commands {
            store.dispatch(cmd).unwrap();
        }
        let category = category_id(c);
        let before = membership(store.selection(), category.as_str());

        let set = Command::SetQuery { category: category.clone(), query };
        store.dispatch(set.clone()).unwrap();
        let once = visible(store.selection(), category.as_str());
        let again = store.dispatch(set).unwrap();

        prop_assert!(again.is_empty());
        prop_assert_eq!(once, visible(store.selection(), category.as_str()));
        prop_assert_eq!(before, membership(store.selection(), category.as_str()));
    }

    #[test]
    fn prop_select_then_unselect_restores_membership(
        commands in proptest::collection::vec(command(), 0..30),
        c in 0..2usize,
        i in 0..4usize,
    ) {
        let mut store = CoreStore::new(&config()).unwrap();
        for cmd in commands {
            store.dispatch(cmd).unwrap();
        }
        let mut selection = store.selection().clone();
        let category = category_id(c);
        let item = item_id(c, i);
        prop_assume!(selection.pair(category.as_str()).unwrap().is_available(item.as_str()));

        let before = membership(&selection, category.as_str());
        selection.move_to_selected(category.as_str(), item.as_str()).unwrap();
        selection.move_to_available(category.as_str(), item.as_str()).unwrap();
        prop_assert_eq!(before, membership(&selection, category.as_str()));
    }
}

#[test]
fn test_sample_catalog_loads_into_store() {
    let store = CoreStore::new(&pickset_core::config::sample_config()).unwrap();
    assert_eq!(store.summaries().len(), 5);
    assert_partition_sample(store.selection());
}

fn assert_partition_sample(selection: &Selection) {
    for category in selection.catalog().categories() {
        let pair = selection.pair(category.id().as_str()).unwrap();
        assert_eq!(pair.available_len() + pair.selected_len(), category.len());
    }
}
