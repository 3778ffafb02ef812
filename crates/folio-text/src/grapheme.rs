#![forbid(unsafe_code)]

//! Layout units.
//!
//! The editor lays out one unit per extended grapheme cluster, so combining
//! marks, ZWJ emoji and flags never split across rows or caret stops. Every
//! line-break spelling collapses to a single [`LINE_BREAK`] unit.
//!
//! # Example
//! ```
//! use folio_text::units;
//!
//! let units: Vec<&str> = units("ab\r\nc").collect();
//! assert_eq!(units, vec!["a", "b", "\n", "c"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Canonical value of a line-break unit.
pub const LINE_BREAK: &str = "\n";

/// Whether a grapheme cluster ends a line.
#[inline]
#[must_use]
pub fn is_line_break(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n" | "\r")
}

/// Split text into layout units, normalizing line breaks to [`LINE_BREAK`].
pub fn units(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
        .map(|g| if is_line_break(g) { LINE_BREAK } else { g })
}

/// Number of layout units in `text`.
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Display width of `text` in monospace cells.
///
/// Line breaks contribute nothing; CJK and other wide clusters count as 2.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.bytes().filter(|b| (0x20..=0x7E).contains(b)).count();
    }
    text.graphemes(true)
        .filter(|g| !is_line_break(g))
        .map(|g| g.width())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_break_spellings() {
        assert!(is_line_break("\n"));
        assert!(is_line_break("\r\n"));
        assert!(is_line_break("\r"));
        assert!(!is_line_break(" "));
        assert!(!is_line_break("a"));
    }

    #[test]
    fn units_normalize_breaks() {
        let got: Vec<&str> = units("a\rb\r\nc\n").collect();
        assert_eq!(got, vec!["a", "\n", "b", "\n", "c", "\n"]);
    }

    #[test]
    fn units_keep_clusters_whole() {
        // e + combining acute accent is one unit
        let got: Vec<&str> = units("e\u{301}x").collect();
        assert_eq!(got, vec!["e\u{301}", "x"]);
    }

    #[test]
    fn count_matches_units() {
        let text = "测试\nabc";
        assert_eq!(grapheme_count(text), units(text).count());
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("ab\ncd"), 4);
    }

    #[test]
    fn width_cjk() {
        assert_eq!(display_width("测试"), 4);
        assert_eq!(display_width("a测"), 3);
    }

    #[test]
    fn width_of_break_is_zero() {
        assert_eq!(display_width("\n"), 0);
        assert_eq!(display_width("\r\n"), 0);
    }
}
