//! Input box renderer.
//!
//! A three-line framed box holding the draft. The frame switches color while
//! an item is being edited, and a block cursor trails the text while the box
//! has focus.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBarInfo;

/// Horizontal margin for the input box (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 2;

const CURSOR: &str = "█";

/// Renders the input box starting at `row`. Returns `row + 3`.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ New item: buy milk█  │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// Drafts longer than the box show their tail so the cursor stays visible.
pub fn render_input_bar(out: &mut String, row: usize, input: &InputBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if input.is_editing {
        Theme::fg(&theme.colors.input_editing_border)
    } else if input.is_focused {
        Theme::fg(&theme.colors.input_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(INPUT_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let prefix = format!(" {} ", input.label);
    let cursor = if input.is_focused { CURSOR } else { "" };
    let text_room = inner_width.saturating_sub(text_width(&prefix) + text_width(cursor));
    let shown = tail(&input.text, text_room);
    let used = text_width(&prefix) + text_width(&shown) + text_width(cursor);

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(INPUT_BOX_MARGIN));
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&prefix);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&shown);
    out.push_str(cursor);
    out.push_str(&" ".repeat(inner_width.saturating_sub(used)));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(INPUT_BOX_MARGIN));
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}

/// The last `max` characters of `text`.
fn tail(text: &str, max: usize) -> String {
    let len = text_width(text);
    text.chars().skip(len.saturating_sub(max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(text: &str, is_focused: bool) -> InputBarInfo {
        InputBarInfo {
            label: "New item:".to_string(),
            text: text.to_string(),
            is_editing: false,
            is_focused,
        }
    }

    #[test]
    fn test_tail_keeps_end_of_text() {
        assert_eq!(tail("hello world", 5), "world");
        assert_eq!(tail("hi", 5), "hi");
    }

    #[test]
    fn test_focused_box_shows_cursor() {
        let mut out = String::new();
        let next = render_input_bar(&mut out, 5, &bar("milk", true), &Theme::default(), 40);
        assert_eq!(next, 8);
        assert!(out.contains(&format!("milk{CURSOR}")));
    }

    #[test]
    fn test_unfocused_box_has_no_cursor() {
        let mut out = String::new();
        render_input_bar(&mut out, 5, &bar("milk", false), &Theme::default(), 40);
        assert!(!out.contains(CURSOR));
    }

    #[test]
    fn test_long_draft_shows_tail() {
        let mut out = String::new();
        let draft = format!("{}END", "a".repeat(100));
        render_input_bar(&mut out, 1, &bar(&draft, true), &Theme::default(), 40);
        assert!(out.contains(&format!("END{CURSOR}")));
        assert!(!out.contains(&"a".repeat(100)));
    }
}
