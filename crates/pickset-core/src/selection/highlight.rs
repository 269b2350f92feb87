//! Search-match highlighting.
//!
//! Matching runs over the same normalized text the filter tests visibility
//! against (icon word dropped, whitespace runs collapsed, lower-cased), and
//! the hit is mapped back onto the raw label. The markup form escapes `&`,
//! `<` and `>` in the label and wraps that span in `<mark>`/`</mark>`.
//! [`strip_highlight`] inverts it exactly, so a label survives a
//! highlight/strip cycle byte-for-byte.

use std::ops::Range;

use crate::catalog::search::search_chars;

const OPEN: &str = "<mark>";
const CLOSE: &str = "</mark>";

/// A label with an optional matched byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted<'a> {
    label: &'a str,
    range: Option<Range<usize>>,
}

impl<'a> Highlighted<'a> {
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// The matched slice of the label, if any.
    pub fn matched(&self) -> Option<&'a str> {
        self.range.clone().map(|range| &self.label[range])
    }

    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// Render as escaped markup with the match wrapped in `<mark>`.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.label.len() + OPEN.len() + CLOSE.len());
        match &self.range {
            Some(range) => {
                escape_into(&mut out, &self.label[..range.start]);
                out.push_str(OPEN);
                escape_into(&mut out, &self.label[range.clone()]);
                out.push_str(CLOSE);
                escape_into(&mut out, &self.label[range.end..]);
            }
            None => escape_into(&mut out, self.label),
        }
        out
    }
}

/// Locate the first occurrence of `query` in the search text of `label`.
///
/// `query` is expected to be normalized (see
/// [`normalize_query`](crate::catalog::normalize_query)). An empty query
/// never matches. The returned range covers whole label characters; a match
/// on a collapsed space covers the full whitespace run.
pub fn highlight<'a>(label: &'a str, icon: Option<&str>, query: &str) -> Highlighted<'a> {
    Highlighted {
        label,
        range: find_in_search_text(label, icon, query),
    }
}

/// Remove highlight markup and unescape entities.
pub fn strip_highlight(markup: &str) -> String {
    let without_tags = markup.replace(OPEN, "").replace(CLOSE, "");
    unescape(&without_tags)
}

fn find_in_search_text(label: &str, icon: Option<&str>, query: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return None;
    }

    let chars = search_chars(label, icon);
    chars
        .windows(needle.len())
        .find(|window| window.iter().map(|(ch, _)| ch).eq(needle.iter()))
        .map(|window| window[0].1.start..window[window.len() - 1].1.end)
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let (decoded, consumed) = if rest.starts_with("&amp;") {
            ('&', 5)
        } else if rest.starts_with("&lt;") {
            ('<', 4)
        } else if rest.starts_with("&gt;") {
            ('>', 4)
        } else {
            ('&', 1)
        };
        out.push(decoded);
        rest = &rest[consumed..];
    }
    out.push_str(rest);
    out
}
