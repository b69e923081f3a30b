//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from a list
//! snapshot and consumed by the renderer. They hold display-ready data only:
//! truncated text, formatted ages, selection and edit markers.

/// Complete UI view model for one render pass.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the item table within the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    /// One tab per filter, in tab order.
    pub filter_tabs: Vec<FilterTab>,

    pub input_bar: InputBarInfo,

    pub footer: FooterInfo,

    /// Set when the filtered list is empty; replaces the table.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single item row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Item text, truncated to the table width.
    pub text: String,

    /// Relative creation time, e.g. `"5m ago"`.
    pub age: String,

    pub is_completed: bool,

    pub is_selected: bool,

    /// Whether this item is the current edit target.
    pub is_editing: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// One filter tab.
#[derive(Debug, Clone)]
pub struct FilterTab {
    /// Tab text including its number key, e.g. `" 2 ACTIVE "`.
    pub label: String,
    pub is_active: bool,
}

/// Input box display information.
///
/// The same box serves new items and edits; `label` tells them apart.
#[derive(Debug, Clone)]
pub struct InputBarInfo {
    /// `"New item:"` or `"Editing:"`.
    pub label: String,

    /// Current draft text.
    pub text: String,

    pub is_editing: bool,

    /// Whether keystrokes go to the draft (Insert mode).
    pub is_focused: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Message shown in place of the table when no items pass the filter.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "Nothing active").
    pub message: String,

    /// Secondary hint (e.g. "Press 'i' and type to add one").
    pub subtitle: String,
}
