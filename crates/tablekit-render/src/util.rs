//! Text width, padding and color conversion helpers.
//!
//! Widths are terminal columns, computed with Unicode width rules, so wide
//! characters count as two and combining marks as zero. Text passed to
//! these helpers must be unstyled.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// ```rust
/// use tablekit_render::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads on the right to `width` columns. Longer text is returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Pads on the left to `width` columns. Longer text is returned unchanged.
pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Centers within `width` columns; odd padding puts the extra space on the
/// right.
pub fn pad_center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Truncates to at most `max_width` columns, ending in `…` when cut.
///
/// ```rust
/// use tablekit_render::truncate_end;
///
/// assert_eq!(truncate_end("Raydium", 10), "Raydium");
/// assert_eq!(truncate_end("5VERv8NMvzbJMEkV8xnrLkEaWRtSz", 8), "5VERv8N…");
/// ```
pub fn truncate_end(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - 1;
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use tablekit_render::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((192, 192, 192)), 249);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
