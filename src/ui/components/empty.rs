//! Empty state component renderer.
//!
//! Shown in place of the item table when no items pass the filter.

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line centered message, leaving one blank row above it.
///
/// The message uses `empty_state_fg`; the subtitle uses `text_dim` with dim
/// styling. Returns the row after the subtitle.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + 1;

    position_cursor(out, message_row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, message_row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());

    message_row + 2
}
