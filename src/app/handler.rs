//! Event handling and state transition logic.
//!
//! Translates user intents into [`ListStore`](super::ListStore) operations
//! and pane state changes. The handler follows a unidirectional flow:
//!
//! 1. The plugin shim maps a key press to an [`Event`]
//! 2. [`handle_event`] pattern-matches it and mutates [`AppState`]
//! 3. The selection is clamped to the (possibly changed) visible list
//! 4. A render flag and any [`Action`]s are returned to the shim
//!
//! # Example
//!
//! ```rust
//! use ztodo::app::{handle_event, AppState, Event, ListStore};
//! use ztodo::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(ListStore::new(), ThemePair::default());
//! for event in [Event::FocusInput, Event::Char('h'), Event::Char('i'), Event::Submit] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.store.items()[0].text, "hi");
//! # Ok::<(), ztodo::TodoError>(())
//! ```

use super::modes::InputMode;
use super::store::SubmitOutcome;
use crate::app::{Action, AppState};
use crate::domain::{Filter, Result};

/// User intents forwarded by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    KeyDown,
    /// Moves the cursor up one row (wraps to bottom).
    KeyUp,
    /// Starts typing into the draft.
    FocusInput,
    /// Appends a character to the draft (Insert mode only).
    Char(char),
    /// Removes the last character from the draft (Insert mode only).
    Backspace,
    /// Submits the draft as a new item or as the edit target's text.
    Submit,
    /// Leaves Insert mode, cancelling an edit in progress.
    Escape,
    /// Flips completion of the item under the cursor.
    ToggleSelected,
    /// Loads the item under the cursor into the draft for editing.
    EditSelected,
    /// Deletes the item under the cursor.
    DeleteSelected,
    /// Switches to a specific filter.
    SetFilter(Filter),
    /// Switches to the next filter tab.
    CycleFilter,
    /// Flips between the light and dark theme.
    ToggleDarkMode,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// # Errors
///
/// List operations are total, so no current event fails; the `Result` keeps
/// the shim's error path uniform with fallible setup code.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FocusInput => {
            if state.input_mode == InputMode::Insert {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering insert mode");
            state.input_mode = InputMode::Insert;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Insert {
                return Ok((false, vec![]));
            }
            let mut draft = state.store.draft().to_string();
            draft.push(*c);
            state.store.set_draft(draft);
            tracing::trace!(draft_len = state.store.draft().len(), "draft updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Insert {
                return Ok((false, vec![]));
            }
            let mut draft = state.store.draft().to_string();
            if draft.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.store.set_draft(draft);
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.input_mode != InputMode::Insert {
                return Ok((false, vec![]));
            }
            match state.store.submit() {
                SubmitOutcome::Created(id) => {
                    tracing::debug!(item_id = %id, "item added");
                    state.select_id(id);
                }
                SubmitOutcome::Updated(id) => {
                    tracing::debug!(item_id = %id, "edit saved");
                    state.input_mode = InputMode::Normal;
                    state.select_id(id);
                }
                SubmitOutcome::EditTargetMissing(id) => {
                    tracing::debug!(item_id = %id, "edit target gone, edit dropped");
                    state.input_mode = InputMode::Normal;
                    state.clamp_selection();
                }
                SubmitOutcome::EmptyDraft => {
                    tracing::debug!("empty draft, nothing to submit");
                    return Ok((false, vec![]));
                }
            }
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.input_mode != InputMode::Insert {
                return Ok((false, vec![]));
            }
            if state.store.cancel_edit() {
                tracing::debug!("edit cancelled");
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ToggleSelected => {
            let Some(id) = state.selected_id() else {
                tracing::debug!("no item selected to toggle");
                return Ok((false, vec![]));
            };
            state.store.toggle_complete(id);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::EditSelected => {
            let Some(id) = state.selected_id() else {
                tracing::debug!("no item selected to edit");
                return Ok((false, vec![]));
            };
            state.store.start_edit(id);
            state.input_mode = InputMode::Insert;
            tracing::debug!(item_id = %id, "editing item");
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            let Some(id) = state.selected_id() else {
                tracing::debug!("no item selected to delete");
                return Ok((false, vec![]));
            };
            state.store.delete_item(id);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::SetFilter(filter) => {
            if state.store.filter() == *filter {
                return Ok((false, vec![]));
            }
            state.store.set_filter(*filter);
            state.clamp_selection();
            tracing::debug!(filter = %filter, "filter changed");
            Ok((true, vec![]))
        }
        Event::CycleFilter => {
            let next = state.store.filter().next();
            state.store.set_filter(next);
            state.clamp_selection();
            tracing::debug!(filter = %next, "filter changed");
            Ok((true, vec![]))
        }
        Event::ToggleDarkMode => {
            state.store.toggle_dark_mode();
            tracing::debug!(dark_mode = state.store.dark_mode(), "display mode toggled");
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ListStore;
    use crate::ui::theme::ThemePair;

    fn new_state() -> AppState {
        AppState::new(ListStore::new(), ThemePair::default())
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn texts(state: &AppState) -> Vec<String> {
        state.store.items().iter().map(|i| i.text.clone()).collect()
    }

    #[test]
    fn test_chars_ignored_in_normal_mode() {
        let mut state = new_state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.store.draft(), "");
    }

    #[test]
    fn test_typing_and_submit_adds_item_and_stays_in_insert() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "Buy milk");
        send(&mut state, &[Event::Submit]);
        type_text(&mut state, "Walk dog");
        send(&mut state, &[Event::Submit]);

        assert_eq!(texts(&state), vec!["Walk dog", "Buy milk"]);
        assert_eq!(state.input_mode, InputMode::Insert);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_backspace_pops_last_char() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "abc");
        send(&mut state, &[Event::Backspace]);
        assert_eq!(state.store.draft(), "ab");
    }

    #[test]
    fn test_backspace_on_empty_draft_does_not_render() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
    }

    #[test]
    fn test_blank_submit_does_not_render_or_add() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "   ");
        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_escape_keeps_new_draft() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "half");
        send(&mut state, &[Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.store.draft(), "half");
    }

    #[test]
    fn test_edit_selected_then_submit_renames_in_place() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "B");
        send(&mut state, &[Event::Submit]);
        type_text(&mut state, "A");
        send(&mut state, &[Event::Submit, Event::Escape, Event::KeyDown, Event::EditSelected]);

        assert_eq!(state.input_mode, InputMode::Insert);
        assert_eq!(state.store.draft(), "B");

        send(&mut state, &[Event::Backspace]);
        type_text(&mut state, "B renamed");
        send(&mut state, &[Event::Submit]);

        assert_eq!(texts(&state), vec!["A", "B renamed"]);
        assert_eq!(state.store.editing_id(), None);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "A");
        send(&mut state, &[Event::Submit, Event::Escape, Event::EditSelected, Event::Escape]);
        assert_eq!(state.store.editing_id(), None);
        assert_eq!(state.store.draft(), "");
        assert_eq!(texts(&state), vec!["A"]);
    }

    #[test]
    fn test_toggle_and_delete_act_on_selection() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "a");
        send(&mut state, &[Event::Submit]);
        type_text(&mut state, "b");
        send(&mut state, &[Event::Submit, Event::Escape, Event::ToggleSelected]);
        assert!(state.store.items()[0].completed);

        send(&mut state, &[Event::KeyDown, Event::DeleteSelected]);
        assert_eq!(texts(&state), vec!["b"]);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_selection_commands_on_empty_list_do_nothing() {
        let mut state = new_state();
        for event in [Event::ToggleSelected, Event::EditSelected, Event::DeleteSelected] {
            let (render, actions) = handle_event(&mut state, &event).unwrap();
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_toggle_under_active_filter_clamps_selection() {
        let mut state = new_state();
        send(&mut state, &[Event::FocusInput]);
        type_text(&mut state, "a");
        send(&mut state, &[Event::Submit]);
        type_text(&mut state, "b");
        send(&mut state, &[Event::Submit, Event::Escape, Event::SetFilter(Filter::Active)]);
        send(&mut state, &[Event::KeyDown, Event::ToggleSelected]);
        assert_eq!(state.visible_len(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_set_same_filter_does_not_render() {
        let mut state = new_state();
        let (render, _) = handle_event(&mut state, &Event::SetFilter(Filter::All)).unwrap();
        assert!(!render);
    }

    #[test]
    fn test_cycle_filter() {
        let mut state = new_state();
        send(&mut state, &[Event::CycleFilter]);
        assert_eq!(state.store.filter(), Filter::Active);
        send(&mut state, &[Event::CycleFilter, Event::CycleFilter]);
        assert_eq!(state.store.filter(), Filter::All);
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut state = new_state();
        send(&mut state, &[Event::ToggleDarkMode]);
        assert!(state.store.dark_mode());
    }

    #[test]
    fn test_close_focus_emits_action() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
