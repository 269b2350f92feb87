use pickset_core::selection::highlight;
use pickset_core::{CategoryView, ItemView};

/// Two-column rendering of one category: visible available items on the
/// left, selected items on the right.
pub struct PanelFormatter {
    available_width: usize,
    selected_width: usize,
}

impl PanelFormatter {
    pub fn new(view: &CategoryView) -> Self {
        Self {
            available_width: column_width(view.visible_available()),
            selected_width: column_width(view.selected.iter()),
        }
    }

    pub fn print_panel(&self, view: &CategoryView) {
        for line in self.render(view) {
            println!("{}", line);
        }
    }

    pub fn render(&self, view: &CategoryView) -> Vec<String> {
        let summary = &view.summary;
        let toggle = if summary.toggle_enabled {
            format!("[{}]", summary.toggle)
        } else {
            format!("({})", summary.toggle)
        };

        let mut lines = vec![format!(
            "{} ({}): {} selected, {} available  {}",
            summary.name, summary.category, summary.selected_count, summary.available_count, toggle
        )];
        if !summary.query.is_empty() {
            lines.push(format!(
                "  filter '{}': {} shown",
                summary.query, summary.visible_count
            ));
        }

        lines.push(self.top_border());
        lines.push(self.row("Available", "Selected"));
        lines.push(self.separator());

        let available: Vec<String> = view
            .visible_available()
            .map(|item| marked_label(item, &summary.query))
            .collect();
        let selected: Vec<&str> = view.selected.iter().map(|item| item.label.as_str()).collect();

        if summary.no_matches && selected.is_empty() {
            lines.push(self.row("No matches", ""));
        } else if summary.no_matches {
            lines.push(self.row("No matches", selected[0]));
            for label in &selected[1..] {
                lines.push(self.row("", label));
            }
        } else {
            for index in 0..available.len().max(selected.len()) {
                lines.push(self.row(
                    available.get(index).map(String::as_str).unwrap_or(""),
                    selected.get(index).copied().unwrap_or(""),
                ));
            }
        }

        lines.push(self.bottom_border());
        lines
    }

    fn row(&self, available: &str, selected: &str) -> String {
        format!(
            "│ {} │ {} │",
            truncate(available, self.available_width),
            truncate(selected, self.selected_width),
        )
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┐",
            "─".repeat(self.available_width + 2),
            "─".repeat(self.selected_width + 2),
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┤",
            "─".repeat(self.available_width + 2),
            "─".repeat(self.selected_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┘",
            "─".repeat(self.available_width + 2),
            "─".repeat(self.selected_width + 2),
        )
    }
}

fn column_width<'a>(items: impl Iterator<Item = &'a ItemView>) -> usize {
    items
        .map(|item| item.label.chars().count() + 2)
        .max()
        .unwrap_or(0)
        .clamp(12, 40) // Between header min and reasonable terminal width max
}

/// Label with the query match wrapped in brackets, e.g. `[Fr]ench`.
fn marked_label(item: &ItemView, query: &str) -> String {
    let highlighted = highlight(&item.label, item.icon.as_deref(), query);
    match highlighted.range() {
        Some(range) => format!(
            "{}[{}]{}",
            &item.label[..range.start],
            &item.label[range.clone()],
            &item.label[range.end..]
        ),
        None => item.label.clone(),
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
