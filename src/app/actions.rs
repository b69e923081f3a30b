//! Side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](super::AppState) directly; anything
//! that needs the Zellij host is returned as an [`Action`] and executed by the
//! plugin shim after handling completes.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (pressing 'q').
    CloseFocus,
}
