//! Text normalization shared by the item registry and the filter index.

use std::ops::Range;

/// Normalized search text of a label, one entry per character, each paired
/// with the byte range of the label it came from.
///
/// Labels scraped from icon-decorated markup can carry the icon ligature
/// name as a leading word (`"place North America"`). When the item declares
/// an icon, that leading word is dropped. A whitespace run becomes one space
/// spanning the whole run, and every character is lower-cased.
pub fn search_chars(label: &str, icon: Option<&str>) -> Vec<(char, Range<usize>)> {
    let mut offset = label.len() - label.trim_start().len();
    let mut text = label.trim();

    if let Some(icon) = icon.map(str::trim).filter(|icon| !icon.is_empty())
        && let Some(rest) = text.strip_prefix(icon)
        && (rest.is_empty() || rest.starts_with(char::is_whitespace))
    {
        let rest = rest.trim_start();
        offset += text.len() - rest.len();
        text = rest;
    }

    let mut chars = Vec::with_capacity(text.len());
    let mut space: Option<Range<usize>> = None;
    for (index, ch) in text.char_indices() {
        let range = offset + index..offset + index + ch.len_utf8();
        if ch.is_whitespace() {
            space = Some(match space {
                Some(run) => run.start..range.end,
                None => range,
            });
            continue;
        }
        if let Some(run) = space.take() {
            chars.push((' ', run));
        }
        chars.extend(ch.to_lowercase().map(|lower| (lower, range.clone())));
    }
    chars
}

/// Build the search key for an item label. See [`search_chars`].
pub fn normalize_search_key(label: &str, icon: Option<&str>) -> String {
    search_chars(label, icon).into_iter().map(|(ch, _)| ch).collect()
}

/// Normalize a free-text query: trim, lower-case, cap at `max_chars` characters.
///
/// Truncation happens on a character boundary before lower-casing, and
/// lower-casing is per character so it agrees with [`search_chars`].
pub fn normalize_query(query: &str, max_chars: usize) -> String {
    let trimmed = query.trim();
    let capped: String = trimmed.chars().take(max_chars).collect();
    capped.trim_end().chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_key_lowercases() {
        assert_eq!(normalize_search_key("North America", None), "north america");
    }

    #[test]
    fn test_search_key_strips_leading_icon() {
        assert_eq!(
            normalize_search_key("place  North   America", Some("place")),
            "north america"
        );
    }

    #[test]
    fn test_search_key_keeps_icon_word_inside_label() {
        // "Marketplace" starts with neither "place" nor a whole word match
        assert_eq!(
            normalize_search_key("Marketplace", Some("place")),
            "marketplace"
        );
        assert_eq!(
            normalize_search_key("placeholder", Some("place")),
            "placeholder"
        );
    }

    #[test]
    fn test_search_key_ignores_blank_icon() {
        assert_eq!(normalize_search_key(" Europe ", Some("  ")), "europe");
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  FR ", 256), "fr");
        assert_eq!(normalize_query("", 256), "");
        assert_eq!(normalize_query("   ", 256), "");
    }

    #[test]
    fn test_normalize_query_caps_length() {
        assert_eq!(normalize_query("Europe", 3), "eur");
        assert_eq!(normalize_query("ab cd", 3), "ab");
        assert_eq!(normalize_query("Ärger", 2), "är");
    }

    #[test]
    fn test_search_chars_map_back_to_label() {
        let label = "place North  America";
        let chars = search_chars(label, Some("place"));

        let key: String = chars.iter().map(|(ch, _)| *ch).collect();
        assert_eq!(key, "north america");
        assert_eq!(chars[0].1, 6..7);
        // the double space is one entry covering both bytes
        assert_eq!(chars[5], (' ', 11..13));
        assert_eq!(&label[chars[6].1.clone()], "A");
    }

    #[test]
    fn test_query_folds_case_like_search_key() {
        let label = "ΟΔΟΣ";
        assert_eq!(normalize_query(label, 256), normalize_search_key(label, None));
    }
}
