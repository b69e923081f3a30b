//! Domain layer for the ztodo plugin.
//!
//! Core types independent of Zellij APIs and of rendering.
//!
//! - [`error`]: Error type and result alias
//! - [`item`]: List items, their ids, and the view filter

pub mod error;
pub mod item;

pub use error::{Result, TodoError};
pub use item::{Filter, Item, ItemId};
