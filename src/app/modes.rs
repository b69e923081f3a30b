//! Input mode state for the plugin pane.
//!
//! The pane is either navigating the list (`Normal`) or typing into the
//! draft (`Insert`). The mode decides how a key press is interpreted and
//! which keybinding hints the footer shows.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation and commands.
    ///
    /// Keybindings: j/k (navigate), i/a (type), space/x (toggle), e (edit),
    /// d (delete), tab (next filter), 1/2/3 (pick filter), t (theme), q (quit).
    #[default]
    Normal,

    /// Typing into the draft.
    ///
    /// Characters are appended to the draft, Enter submits and Esc leaves the
    /// input (cancelling an edit in progress).
    Insert,
}
