//! List item model and the view filter applied to it.
//!
//! An [`Item`] is a single entry in the list: its text, a completion flag,
//! and an opaque [`ItemId`] handed out by the owning store. A [`Filter`]
//! decides which items are shown.

use super::error::TodoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Opaque, unique identifier of an item within one store.
///
/// Ids are strictly increasing in creation order and never reused, but
/// callers should only rely on equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single list entry.
///
/// `text` is always non-empty and trimmed: the store rejects blank drafts
/// before an item is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    /// Unix timestamp (seconds) of creation.
    pub created_at: i64,
}

impl Item {
    pub(crate) fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Returns how long ago the item was created, e.g. `"just now"` or `"3h ago"`.
    ///
    /// ```
    /// # use ztodo::domain::Item;
    /// # let mut store = ztodo::app::ListStore::new();
    /// # store.set_draft("water plants");
    /// # store.submit();
    /// let item: &Item = &store.items()[0];
    /// assert_eq!(item.age(), "just now");
    /// ```
    #[must_use]
    pub fn age(&self) -> String {
        Self::format_age(chrono::Utc::now().timestamp() - self.created_at)
    }

    fn format_age(diff: i64) -> String {
        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

/// View predicate applied to the item collection for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item.
    #[default]
    All,
    /// Items not yet completed.
    Active,
    /// Completed items only.
    Completed,
}

impl Filter {
    /// All filters in tab order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Whether `item` passes this filter.
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// The next filter in tab order, wrapping from `Completed` back to `All`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Upper-case tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(TodoError::InvalidFilter(s.to_string())),
        }
    }
}
