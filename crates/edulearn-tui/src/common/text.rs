//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` columns.
///
/// Uses unicode width so wide characters (CJK, emoji) are measured the way
/// the terminal draws them.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// One bullet per character, so the field length stays visible.
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}

/// Text progress bar like `███████░░░`, `width` cells wide.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_long() {
        assert_eq!(truncate_with_ellipsis("Introduction", 6), "Intro…");
        assert_eq!(truncate_with_ellipsis("Introduction", 1), "…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_chars() {
        let out = truncate_with_ellipsis("学习学习学习", 5);
        assert_eq!(out, "学习…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn test_mask_counts_chars() {
        assert_eq!(mask("pässword"), "••••••••");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(75, 4), "███░");
        assert_eq!(progress_bar(100, 4), "████");
        assert_eq!(progress_bar(250, 2), "██");
    }
}
