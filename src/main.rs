//! Zellij plugin entry point.
//!
//! A thin layer between Zellij and the ztodo library: it parses the plugin
//! configuration, turns key presses into library events, executes the
//! resulting actions and hands rendering to [`ztodo::ui::render`].
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map keys to events, delegate to `handle_event`
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move the cursor
//! - `i`/`a`: Type a new item
//! - `Space`/`x`: Toggle completion
//! - `e`: Edit the selected item
//! - `d`: Delete the selected item
//! - `Tab`: Next filter; `1`/`2`/`3`: All / Active / Completed
//! - `t`: Toggle dark mode
//! - `q`: Close plugin
//!
//! In insert mode:
//! - Printable keys: Type into the draft
//! - `Backspace`: Delete the last character
//! - `Enter`: Add the item or save the edit
//! - `Esc`: Back to the list (cancels an edit)

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use ztodo::{handle_event, Action, Config, Event, Filter, InputMode};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: ztodo::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: ztodo::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = ztodo::observability::init_tracing(&config) {
            eprintln!("ztodo: tracing disabled: {e}");
        }

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = ztodo::initialize(&config);
        subscribe(&[EventType::Key]);

        tracing::debug!("plugin load complete");
    }

    /// Returns `true` if the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update", key = ?key.bare_key, mode = ?self.app.input_mode);
        let _guard = span.entered();

        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        ztodo::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }
        if key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        match self.app.input_mode {
            InputMode::Insert => Self::map_insert_key(&key.bare_key),
            InputMode::Normal => Self::map_normal_key(&key.bare_key),
        }
    }

    fn map_insert_key(key: &BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(*c),
            _ => return None,
        })
    }

    fn map_normal_key(key: &BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('i' | 'a') => Event::FocusInput,
            BareKey::Char(' ' | 'x') => Event::ToggleSelected,
            BareKey::Char('e') => Event::EditSelected,
            BareKey::Char('d') => Event::DeleteSelected,
            BareKey::Tab => Event::CycleFilter,
            BareKey::Char('1') => Event::SetFilter(Filter::All),
            BareKey::Char('2') => Event::SetFilter(Filter::Active),
            BareKey::Char('3') => Event::SetFilter(Filter::Completed),
            BareKey::Char('t') => Event::ToggleDarkMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
