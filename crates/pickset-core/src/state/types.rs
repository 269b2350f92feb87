use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, ItemId};
use crate::selection::DropTarget;

/// All selection operations that can be dispatched through the store.
///
/// Each variant captures the parameters needed to execute the operation.
/// Commands use owned types so they can be serialized, replayed from a file,
/// and sent across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Move an available item to the end of the selected bucket (click on an
    /// available item).
    Select { category: CategoryId, item: ItemId },
    /// Return a selected item to available (click on a selected item or its
    /// remove button).
    Unselect { category: CategoryId, item: ItemId },
    /// Replace a category's search query.
    SetQuery { category: CategoryId, query: String },
    /// Press the category's toggle button: select every visible available
    /// item, or unselect everything when nothing is visible.
    SelectAllVisible { category: CategoryId },
    /// Return every selected item of a category.
    UnselectAll { category: CategoryId },
    /// Pointer drag started over an item.
    DragStart { category: CategoryId, item: ItemId },
    /// Dragged item released over `target`.
    Drop { target: DropTarget },
    /// Drag finished without a drop.
    DragEnd,
    /// Replace a category's selection with `items`, in order.
    Restore {
        category: CategoryId,
        items: Vec<ItemId>,
    },
    /// Replace the whole selection from an exported query string.
    RestoreQuery { query: String },
    /// Unselect everything and clear every query.
    ClearAll,
    /// Clear everything, then re-apply the catalog defaults.
    ResetDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Bucket;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = Command::Drop {
            target: DropTarget::Bucket {
                category: CategoryId::new("language"),
                bucket: Bucket::Selected,
            },
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }

    #[test]
    fn test_command_json_shape() {
        let json = r#"[
            {"command": "select", "category": "language", "item": "English"},
            {"command": "set_query", "category": "language", "query": "fr"},
            {"command": "select_all_visible", "category": "language"},
            {"command": "drag_start", "category": "language", "item": "German"},
            {"command": "drop", "target": {"kind": "outside"}},
            {"command": "drag_end"},
            {"command": "restore", "category": "region", "items": ["eu"]},
            {"command": "restore_query", "query": "regions=Europe"},
            {"command": "clear_all"},
            {"command": "reset_defaults"}
        ]"#;
        let commands: Vec<Command> = serde_json::from_str(json).unwrap();
        assert_eq!(commands.len(), 10);
        assert_eq!(
            commands[0],
            Command::Select {
                category: CategoryId::new("language"),
                item: ItemId::new("English"),
            }
        );
        assert_eq!(
            commands[4],
            Command::Drop {
                target: DropTarget::Outside
            }
        );
        assert_eq!(commands[9], Command::ResetDefaults);
    }

    #[test]
    fn test_unknown_command_rejected() {
        let result: Result<Command, _> =
            serde_json::from_str(r#"{"command": "select_everything"}"#);
        assert!(result.is_err());
    }
}
