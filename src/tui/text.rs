//! Display-width helpers. CJK glyphs take two terminal cells, so byte or
//! char counts are not enough for layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate `s` to at most `max_width` cells, ending with "…" if cut.
pub fn truncate_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Right-pad `s` with spaces to `width` cells.
pub fn pad_width(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_counts_double() {
        assert_eq!(display_width("按钮"), 4);
        assert_eq!(display_width("Button"), 6);
    }

    #[test]
    fn test_truncate_width() {
        assert_eq!(truncate_width("Button", 10), "Button");
        assert_eq!(truncate_width("Button", 4), "But…");
        assert_eq!(truncate_width("用于触发操作", 5), "用于…");
        assert_eq!(truncate_width("abc", 0), "");
    }

    #[test]
    fn test_pad_width() {
        assert_eq!(pad_width("按钮", 6), "按钮  ");
        assert_eq!(pad_width("long", 2), "long");
    }
}
