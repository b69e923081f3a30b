//! Application layer coordinating list state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain layer:
//!
//! ```text
//! Key Press → Event → handle_event → ListStore / AppState → (render?, Actions)
//!                                            ↓
//!                                      ListSnapshot → UIViewModel
//! ```
//!
//! # Modules
//!
//! - [`store`]: The list store, sole owner of items, edit target, filter and display mode
//! - [`state`]: Pane state (cursor, input mode, themes) and view model computation
//! - [`handler`]: Event processing and state transitions
//! - [`actions`]: Side effects for the plugin runtime
//! - [`modes`]: Input mode type

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
pub use store::{ListSnapshot, ListState, ListStore, SubmitOutcome};
