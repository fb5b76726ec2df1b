//! Display-width helpers for terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` cells, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    // One cell goes to the ellipsis.
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };
    let mut used = 0;
    let end = s
        .char_indices()
        .find(|&(_, c)| {
            used += char_width(c);
            used > budget
        })
        .map_or(s.len(), |(i, _)| i);
    format!("{}…", &s[..end])
}

/// Pad `s` with spaces up to `width` cells.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    let mut out = s.to_string();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    out
}
