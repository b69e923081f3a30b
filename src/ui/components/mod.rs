//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into a shared buffer and
//! returns the next free row, so the layout reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with item counts
//! - [`tabs`]: Filter tab bar (ALL / ACTIVE / COMPLETED)
//! - [`input`]: Draft input box
//! - [`table`]: Item list with checkbox, text and age columns
//! - [`empty`]: Empty state message when no items pass the filter
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Filter Tabs]
//! [Input Box - 3 lines]
//! [Table Headers]          or  [blank]
//! [Table Rows]                 [Empty State - 2 lines]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod input;
mod table;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input_bar;
use table::{render_table_headers, render_table_rows};
use tabs::render_filter_tabs;

/// Rows taken by everything except the item rows: blank line, header,
/// border, tabs, input box (3), table header, border, footer.
pub const CHROME_ROWS: usize = 10;

/// Width of the `[x] ` checkbox column.
pub const CHECKBOX_WIDTH: usize = 4;

/// Width of the right-aligned age column, including its leading gap.
pub const AGE_COLUMN_WIDTH: usize = 10;

/// Renders a horizontal border line. Returns the next free row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a complete frame for the view model into `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_filter_tabs(out, current_row, &vm.filter_tabs, theme, cols);
    current_row = render_input_bar(out, current_row, &vm.input_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(out, current_row, theme, cols);
        render_table_rows(out, current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.max(1);
    let border_row = rows.saturating_sub(1).max(1);

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
