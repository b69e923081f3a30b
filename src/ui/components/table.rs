//! Item table renderer.
//!
//! Each row is a checkbox, the item text and its age:
//!
//! ```text
//! [ ] water plants                                   just now
//! [x] buy milk                                         5m ago
//! ```
//!
//! Completed items are struck through and dimmed; the edit target is drawn
//! in the editing color; the selected row gets a full-width background.

use super::{AGE_COLUMN_WIDTH, CHECKBOX_WIDTH};
use crate::ui::helpers::{position_cursor, push_padded, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the column headers. Returns the next free row.
pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    let text_col = cols.saturating_sub(CHECKBOX_WIDTH + AGE_COLUMN_WIDTH);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    push_padded(out, "", CHECKBOX_WIDTH);
    push_padded(out, "ITEM", text_col);
    out.push_str(&format!("{:>AGE_COLUMN_WIDTH$}", "ADDED"));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders every row starting at `row`. Returns the next free row.
pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(out, current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let text_col = cols.saturating_sub(CHECKBOX_WIDTH + AGE_COLUMN_WIDTH);
    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(out, row, 1);
    out.push_str(&base);

    if item.is_completed {
        if !item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.checkbox_fg));
        }
        out.push_str("[x] ");
    } else {
        out.push_str("[ ] ");
    }

    if item.is_editing && !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.input_editing_border));
    } else if item.is_completed {
        if !item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.completed_fg));
        }
        out.push_str(Theme::strikethrough());
    }
    out.push_str(&item.text);

    // Drop strikethrough before padding but keep the row background.
    out.push_str(Theme::reset());
    out.push_str(&base);
    push_padded(out, "", text_col.saturating_sub(text_width(&item.text)));

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&format!("{:>AGE_COLUMN_WIDTH$}", item.age));

    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str, is_completed: bool, is_selected: bool) -> DisplayItem {
        DisplayItem {
            text: text.to_string(),
            age: "just now".to_string(),
            is_completed,
            is_selected,
            is_editing: false,
        }
    }

    #[test]
    fn test_rows_advance_one_line_each() {
        let mut out = String::new();
        let items = vec![row("a", false, true), row("b", true, false)];
        let next = render_table_rows(&mut out, 9, &items, &Theme::default(), 60);
        assert_eq!(next, 11);
        assert!(out.contains("\u{1b}[9;1H"));
        assert!(out.contains("\u{1b}[10;1H"));
    }

    #[test]
    fn test_completed_row_is_checked_and_struck() {
        let mut out = String::new();
        render_table_rows(&mut out, 1, &[row("done", true, false)], &Theme::default(), 60);
        assert!(out.contains("[x] "));
        assert!(out.contains(&format!("{}done", Theme::strikethrough())));
    }

    #[test]
    fn test_open_row_is_unchecked() {
        let mut out = String::new();
        render_table_rows(&mut out, 1, &[row("todo", false, false)], &Theme::default(), 60);
        assert!(out.contains("[ ] "));
        assert!(!out.contains(Theme::strikethrough()));
        assert!(out.contains("  just now"));
    }
}
