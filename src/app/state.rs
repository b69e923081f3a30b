//! Pane state and view model computation.
//!
//! [`AppState`] wraps the [`ListStore`] with what only the terminal pane
//! cares about: the row cursor over visible items, the input mode, and the
//! light/dark theme pair. List data lives in the store; the cursor is
//! derived from it and clamped after every mutation.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a [`ListSnapshot`](super::store::ListSnapshot)
//! plus pane state into a [`UIViewModel`], handling windowing around the
//! selected row, text truncation and the empty state.
//!
//! # Example
//!
//! ```rust
//! use ztodo::app::{AppState, ListStore};
//! use ztodo::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(ListStore::new(), ThemePair::default());
//! state.store.set_draft("water plants");
//! state.store.submit();
//! state.clamp_selection();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! ```

use super::modes::InputMode;
use super::store::{ListSnapshot, ListStore};
use crate::domain::{Filter, Item, ItemId};
use crate::ui::components::{AGE_COLUMN_WIDTH, CHECKBOX_WIDTH, CHROME_ROWS};
use crate::ui::theme::{Theme, ThemePair};
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FilterTab, FooterInfo, HeaderInfo, InputBarInfo, UIViewModel,
};

/// Central pane state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The list itself. All list mutations go through it.
    pub store: ListStore,

    /// Zero-based cursor within the visible items.
    ///
    /// Kept in bounds by `clamp_selection()`; wraps during navigation.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Light and dark color schemes; the store's dark mode flag picks one.
    pub themes: ThemePair,
}

impl AppState {
    #[must_use]
    pub fn new(store: ListStore, themes: ThemePair) -> Self {
        Self {
            store,
            selected_index: 0,
            input_mode: InputMode::Normal,
            themes,
        }
    }

    /// The theme matching the current display mode.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.themes.select(self.store.dark_mode())
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.store.visible_items().count()
    }

    /// The item under the cursor, if the visible list is non-empty.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.store.visible_items().nth(self.selected_index)
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected_item().map(|item| item.id)
    }

    /// Moves the cursor down one row, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up one row, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Places the cursor on `id` if it is visible, otherwise just clamps.
    pub fn select_id(&mut self, id: ItemId) {
        let pos = self.store.visible_items().position(|item| item.id == id);
        match pos {
            Some(pos) => self.selected_index = pos,
            None => self.clamp_selection(),
        }
    }

    /// Keeps the cursor within the visible items.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    ///
    /// # Windowing
    ///
    /// When the visible list is taller than the table area, the window is
    /// centered on the selected row and pulled back near either end so it is
    /// always full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let snapshot = self.store.snapshot();

        let header = Self::compute_header(&snapshot);
        let filter_tabs = Self::compute_filter_tabs(snapshot.filter);
        let input_bar = self.compute_input_bar(&snapshot);
        let footer = self.compute_footer();

        if snapshot.items.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header,
                filter_tabs,
                input_bar,
                footer,
                empty_state: Some(Self::compute_empty_state(&snapshot)),
            };
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let total = snapshot.items.len();
        // The cursor can be stale if the store was mutated without a clamp.
        let selected = self.selected_index.min(total - 1);

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(total);
        if visible_end - visible_start < available_rows && total >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let text_width = cols.saturating_sub(CHECKBOX_WIDTH + AGE_COLUMN_WIDTH);

        let display_items = snapshot.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_display_item(item, absolute_idx == selected, snapshot.editing_id, text_width)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: selected - visible_start,
            header,
            filter_tabs,
            input_bar,
            footer,
            empty_state: None,
        }
    }

    fn compute_display_item(
        item: &Item,
        is_selected: bool,
        editing_id: Option<ItemId>,
        text_width: usize,
    ) -> DisplayItem {
        DisplayItem {
            text: truncate(&item.text, text_width),
            age: item.age(),
            is_completed: item.completed,
            is_selected,
            is_editing: editing_id == Some(item.id),
        }
    }

    fn compute_header(snapshot: &ListSnapshot<'_>) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " TODO LIST  {} active / {} done ",
                snapshot.active, snapshot.completed
            ),
        }
    }

    fn compute_filter_tabs(current: Filter) -> Vec<FilterTab> {
        Filter::ALL
            .iter()
            .enumerate()
            .map(|(idx, filter)| FilterTab {
                label: format!(" {} {} ", idx + 1, filter.label()),
                is_active: *filter == current,
            })
            .collect()
    }

    fn compute_input_bar(&self, snapshot: &ListSnapshot<'_>) -> InputBarInfo {
        let is_editing = snapshot.editing_id.is_some();
        InputBarInfo {
            label: if is_editing { "Editing:" } else { "New item:" }.to_string(),
            text: snapshot.draft.to_string(),
            is_editing,
            is_focused: self.input_mode == InputMode::Insert,
        }
    }

    fn compute_empty_state(snapshot: &ListSnapshot<'_>) -> EmptyState {
        let (message, subtitle) = match snapshot.filter {
            _ if snapshot.total == 0 => ("No items yet", "Press 'i' and type to add one"),
            Filter::All => ("No items yet", "Press 'i' and type to add one"),
            Filter::Active => ("Nothing active", "Everything here is done"),
            Filter::Completed => ("Nothing completed", "Press space on an item to complete it"),
        };
        EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.store.is_editing()) {
            (InputMode::Insert, true) => "Enter: save edit  ESC: cancel edit  Type to change text",
            (InputMode::Insert, false) => "Enter: add  ESC: back to list  Type to write",
            (InputMode::Normal, _) => {
                "j/k: navigate  i: add  space: toggle  e: edit  d: delete  tab/1-3: filter  t: theme  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Shortens `text` to `max_width` characters, ending in `...` when cut.
fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(texts: &[&str]) -> AppState {
        let mut state = AppState::new(ListStore::new(), ThemePair::default());
        for text in texts {
            state.store.set_draft(*text);
            state.store.submit();
        }
        state
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = state_with(&["a", "b", "c"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down();
        assert_eq!(state.selected_item().unwrap().text, "b");
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut state = state_with(&[]);
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_clamp_selection_after_filter_shrinks_list() {
        let mut state = state_with(&["a", "b", "c"]);
        state.selected_index = 2;
        let id = state.store.items()[0].id;
        state.store.toggle_complete(id);
        state.store.set_filter(Filter::Completed);
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_select_id_follows_item() {
        let mut state = state_with(&["a", "b", "c"]);
        let a = state.store.items()[2].id;
        state.select_id(a);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_theme_follows_dark_mode() {
        let mut state = state_with(&[]);
        assert_eq!(state.theme().name, "catppuccin-latte");
        state.store.toggle_dark_mode();
        assert_eq!(state.theme().name, "catppuccin-mocha");
    }

    #[test]
    fn test_viewmodel_empty_state_depends_on_filter() {
        let mut state = state_with(&[]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No items yet");

        state.store.set_draft("a");
        state.store.submit();
        state.store.set_filter(Filter::Completed);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "Nothing completed");
    }

    #[test]
    fn test_viewmodel_marks_active_tab_and_counts() {
        let mut state = state_with(&["a", "b"]);
        let id = state.store.items()[0].id;
        state.store.toggle_complete(id);
        state.store.set_filter(Filter::Active);
        let vm = state.compute_viewmodel(24, 80);

        let active: Vec<_> = vm.filter_tabs.iter().filter(|t| t.is_active).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].label.contains("ACTIVE"));
        assert!(vm.header.title.contains("1 active / 1 done"));
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].text, "a");
    }

    #[test]
    fn test_viewmodel_input_bar_reflects_edit() {
        let mut state = state_with(&["a"]);
        let id = state.store.items()[0].id;
        state.store.start_edit(id);
        state.input_mode = InputMode::Insert;
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.input_bar.label, "Editing:");
        assert_eq!(vm.input_bar.text, "a");
        assert!(vm.input_bar.is_focused);
        assert!(vm.display_items[0].is_editing);
        assert!(vm.footer.keybindings.contains("cancel edit"));
    }

    #[test]
    fn test_viewmodel_windows_around_selection() {
        let texts: Vec<String> = (0..30).map(|n| format!("item {n}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);
        state.selected_index = 29;

        let vm = state.compute_viewmodel(20, 80);
        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].text, "item 0");
    }

    #[test]
    fn test_viewmodel_truncates_long_text() {
        let long = "x".repeat(200);
        let state = state_with(&[long.as_str()]);
        let vm = state.compute_viewmodel(24, 40);
        let text = &vm.display_items[0].text;
        assert_eq!(text.chars().count(), 40 - CHECKBOX_WIDTH - AGE_COLUMN_WIDTH);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn test_select_id_for_hidden_item_clamps() {
        let mut state = state_with(&["a", "b"]);
        let b = state.store.items()[0].id;
        state.store.toggle_complete(b);
        state.store.set_filter(Filter::Active);
        state.selected_index = 1;
        state.select_id(b);
        assert_eq!(state.selected_index, 0);

        let a = state.store.items()[1].id;
        state.select_id(a);
        assert_eq!(state.selected_item().unwrap().text, "a");
    }

    #[test]
    fn test_viewmodel_tolerates_stale_selection() {
        let mut state = state_with(&["a", "b", "c"]);
        state.selected_index = 2;
        let first = state.store.items()[0].id;
        state.store.delete_item(first);
        let second = state.store.items()[0].id;
        state.store.delete_item(second);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.selected_index, 0);
        assert!(vm.display_items[0].is_selected);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ééééé", 5), "ééééé");
        assert_eq!(truncate("éééééé", 5), "éé...");
    }
}
