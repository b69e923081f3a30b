//! User interface rendering layer.
//!
//! Turns pane state into ANSI-styled output through small components:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, filter tabs, input box, table, empty state, footer
//! - [`helpers`]: Cursor positioning and padded text output
//! - [`theme`]: Light/dark color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemePair};
pub use viewmodel::{
    DisplayItem, EmptyState, FilterTab, FooterInfo, HeaderInfo, InputBarInfo, UIViewModel,
};
