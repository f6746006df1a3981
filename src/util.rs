//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, ending in `…` when cut.
///
/// Measures display width rather than bytes, so wide characters (CJK, emoji)
/// never overflow a card's inner area.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Reserve one column for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_to_width("Bob", 10), "Bob");
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("Saving", 6), "Saving");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Saving Private Ryan", 8), "Saving …");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each character is two columns wide
        let s = "日本語";
        assert_eq!(truncate_to_width(s, 4), "日…");
        assert_eq!(truncate_to_width(s, 5), "日本…");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
