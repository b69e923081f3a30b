//! ztodo: a Zellij plugin that keeps a short to-do list in a terminal pane.
//!
//! Items are added, edited, completed, filtered and deleted from the
//! keyboard; the pane switches between a light and a dark color scheme.
//! Nothing is persisted: the list lives as long as the plugin instance.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys in, frames out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ListStore: the only writer of list state         │
//! │  - Event handling and input modes                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ UI Layer (ui/)        │         │ Domain (domain/)      │
//! │ - Components          │         │ - Item, ItemId        │
//! │ - Light/dark themes   │         │ - Filter              │
//! │ - ANSI rendering      │         │ - TodoError           │
//! └───────────────────────┘         └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (sandbox paths) and Observability   │
//! │  (OpenTelemetry spans exported to a local file)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: List store, pane state and event handling
//! - [`domain`]: Items, filters and errors
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox path helpers
//! - [`observability`]: OpenTelemetry tracing to a rotating file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/ztodo.wasm" {
//!         light_theme "catppuccin-latte"
//!         dark_theme "catppuccin-mocha"
//!         dark_theme_file "~/.config/ztodo/night.toml"
//!         dark_mode "true"
//!         filter "active"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ztodo::{handle_event, initialize, Config, Event, Filter};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::FocusInput)?;
//! for c in "buy milk".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::Submit)?;
//! handle_event(&mut state, &Event::SetFilter(Filter::Active))?;
//!
//! let visible: Vec<_> = state.store.visible_items().map(|i| i.text.as_str()).collect();
//! assert_eq!(visible, ["buy milk"]);
//! # Ok::<(), ztodo::TodoError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, ListSnapshot, ListStore, SubmitOutcome};
pub use domain::{Filter, Item, ItemId, Result, TodoError};
pub use ui::{Theme, ThemePair};

use std::collections::BTreeMap;
use crate::ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Plugin configuration parsed from the Zellij layout block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme used while dark mode is off.
    pub light_theme: String,

    /// Built-in theme used while dark mode is on.
    pub dark_theme: String,

    /// TOML theme file overriding `light_theme`. `~/` is expanded.
    pub light_theme_file: Option<String>,

    /// TOML theme file overriding `dark_theme`. `~/` is expanded.
    pub dark_theme_file: Option<String>,

    /// Initial display mode.
    pub dark_mode: bool,

    /// Initial view filter.
    pub filter: Filter,

    /// `EnvFilter` directive for the trace file, e.g. `"debug"` or `"ztodo=trace"`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            light_theme_file: None,
            dark_theme_file: None,
            dark_mode: false,
            filter: Filter::All,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij passes to `load`.
    ///
    /// Missing keys keep their defaults. Unparseable `dark_mode` and `filter`
    /// values are logged and ignored rather than failing the load.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ztodo::{Config, Filter};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dark_mode".to_string(), "true".to_string());
    /// map.insert("filter".to_string(), "Completed".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(config.dark_mode);
    /// assert_eq!(config.filter, Filter::Completed);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let dark_mode = match config.get("dark_mode") {
            Some(raw) => parse_bool(raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "ignoring invalid dark_mode value");
                defaults.dark_mode
            }),
            None => defaults.dark_mode,
        };

        let filter = match config.get("filter") {
            Some(raw) => raw.parse::<Filter>().unwrap_or_else(|e: TodoError| {
                tracing::debug!(error = %e, "ignoring invalid filter value");
                defaults.filter
            }),
            None => defaults.filter,
        };

        Self {
            light_theme: non_empty("light_theme").unwrap_or(defaults.light_theme),
            dark_theme: non_empty("dark_theme").unwrap_or(defaults.dark_theme),
            light_theme_file: non_empty("light_theme_file"),
            dark_theme_file: non_empty("dark_theme_file"),
            dark_mode,
            filter,
            trace_level: non_empty("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TodoError::Config(format!("expected a boolean, got {raw:?}"))),
    }
}

/// Creates the pane state for a freshly loaded plugin.
///
/// Each theme comes from its file if one is configured and loads, else from
/// the built-in name, else from the built-in default for that slot.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        dark_mode = config.dark_mode,
        filter = %config.filter,
        "initializing ztodo"
    );

    let defaults = ThemePair::default();
    let themes = ThemePair {
        light: load_theme(
            config.light_theme_file.as_deref(),
            &config.light_theme,
            defaults.light,
        ),
        dark: load_theme(
            config.dark_theme_file.as_deref(),
            &config.dark_theme,
            defaults.dark,
        ),
    };

    let store = ListStore::with_display(config.filter, config.dark_mode);
    AppState::new(store, themes)
}

fn load_theme(file: Option<&str>, name: &str, fallback: Theme) -> Theme {
    if let Some(file) = file {
        let path = infrastructure::expand_tilde(file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => tracing::debug!(theme_file = %path, error = %e, "failed to load theme file"),
        }
    }

    Theme::from_name(name).unwrap_or_else(|| {
        tracing::debug!(theme_name = %name, "unknown theme name, using default");
        fallback
    })
}
