//! Shared rendering utilities.
//!
//! Components write into a frame buffer (`&mut String`) which the renderer
//! prints in one go. Widths are counted in characters, not bytes, so item
//! text with accents or CJK does not break padding arithmetic.

/// Appends a cursor move to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Character count of `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Appends `text` followed by spaces up to `width` characters.
pub fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(text_width(text))));
}

/// Appends `text` centered in a field of `cols` characters.
///
/// When the padding is odd the extra space goes on the right.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let len = text_width(text);
    let left = cols.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(left + len)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_cursor_sequence() {
        let mut out = String::new();
        position_cursor(&mut out, 5, 1);
        assert_eq!(out, "\u{1b}[5;1H");
    }

    #[test]
    fn test_push_padded_counts_chars() {
        let mut out = String::new();
        push_padded(&mut out, "café", 6);
        assert_eq!(out, "café  ");
    }

    #[test]
    fn test_push_centered_puts_odd_space_right() {
        let mut out = String::new();
        push_centered(&mut out, "ab", 5);
        assert_eq!(out, " ab  ");
    }

    #[test]
    fn test_push_centered_wider_than_field() {
        let mut out = String::new();
        push_centered(&mut out, "abcdef", 3);
        assert_eq!(out, "abcdef");
    }
}
