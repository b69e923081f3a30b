//! Filter tab bar renderer.
//!
//! Shows the three filters side by side; the active one is drawn as a
//! filled pill in the theme's tab colors, the others dimmed.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterTab;

const TAB_GAP: &str = "  ";

/// Renders the tab bar centered on `row`. Returns the next free row.
pub fn render_filter_tabs(out: &mut String, row: usize, tabs: &[FilterTab], theme: &Theme, cols: usize) -> usize {
    let total_width: usize = tabs.iter().map(|t| text_width(&t.label)).sum::<usize>()
        + TAB_GAP.len() * tabs.len().saturating_sub(1);
    let left = cols.saturating_sub(total_width) / 2;

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(left));

    for (idx, tab) in tabs.iter().enumerate() {
        if idx > 0 {
            out.push_str(TAB_GAP);
        }
        if tab.is_active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.tab_active_fg));
            out.push_str(&Theme::bg(&theme.colors.tab_active_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&tab.label);
        out.push_str(Theme::reset());
    }

    out.push_str(&" ".repeat(cols.saturating_sub(left + total_width)));
    row + 1
}
