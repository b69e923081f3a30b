//! Top-level rendering coordinator.
//!
//! Rendering happens in two steps:
//!
//! 1. **View Model Computation**: `AppState` becomes a `UIViewModel`
//! 2. **Component Rendering**: components write the frame into one buffer
//!
//! The buffer is printed once so a frame never shows up half drawn.
//!
//! # Example
//!
//! ```rust
//! use ztodo::app::{AppState, ListStore};
//! use ztodo::ui::renderer::render_viewmodel;
//! use ztodo::ui::ThemePair;
//!
//! let state = AppState::new(ListStore::new(), ThemePair::default());
//! let vm = state.compute_viewmodel(24, 80);
//! let frame = render_viewmodel(&vm, state.theme(), 24, 80);
//! assert!(frame.contains("No items yet"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// The theme follows the store's dark mode flag.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let frame = render_viewmodel(&viewmodel, state.theme(), rows, cols);

    tracing::trace!(
        rows,
        cols,
        bytes = frame.len(),
        items = viewmodel.display_items.len(),
        "rendering frame"
    );
    print!("{frame}");
}

/// Renders a view model into a string of ANSI escape sequences.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane per frame.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::with_capacity(rows * cols * 2);
    components::render_frame(&mut out, vm, theme, cols, rows);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ListStore;
    use crate::domain::Filter;
    use crate::ui::ThemePair;

    fn state_with(texts: &[&str]) -> AppState {
        let mut store = ListStore::new();
        for text in texts {
            store.set_draft(*text);
            store.submit();
        }
        let mut state = AppState::new(store, ThemePair::default());
        state.clamp_selection();
        state
    }

    fn frame(state: &AppState) -> String {
        let vm = state.compute_viewmodel(24, 80);
        render_viewmodel(&vm, state.theme(), 24, 80)
    }

    #[test]
    fn test_frame_lists_items_and_counts() {
        let state = state_with(&["buy milk", "walk dog"]);
        let out = frame(&state);
        assert!(out.contains("buy milk"));
        assert!(out.contains("walk dog"));
        assert!(out.contains("2 active / 0 done"));
        assert!(out.contains("ITEM"));
    }

    #[test]
    fn test_empty_list_shows_empty_state_without_table() {
        let state = state_with(&[]);
        let out = frame(&state);
        assert!(!out.contains("ITEM"));
        assert!(out.contains("No items yet"));
    }

    #[test]
    fn test_frame_uses_theme_for_mode() {
        let mut state = state_with(&["a"]);
        let light = frame(&state);
        state.store.toggle_dark_mode();
        let dark = frame(&state);
        assert_ne!(light, dark);
        assert!(dark.contains(&Theme::fg(&state.themes.dark.colors.border)));
    }

    #[test]
    fn test_footer_drawn_on_last_row() {
        let state = state_with(&["a"]);
        let out = frame(&state);
        assert!(out.contains("\u{1b}[24;1H"));
        assert!(out.contains("\u{1b}[23;1H"));
    }

    #[test]
    fn test_filtered_out_items_not_drawn() {
        let mut state = state_with(&["open", "closed"]);
        let closed = state
            .store
            .items()
            .iter()
            .find(|item| item.text == "closed")
            .unwrap()
            .id;
        state.store.toggle_complete(closed);
        state.store.set_filter(Filter::Active);
        state.clamp_selection();
        let out = frame(&state);
        assert!(out.contains("open"));
        assert!(!out.contains("closed"));
    }
}
