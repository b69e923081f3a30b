//! The list store: items, the edit target, the active filter and display mode.
//!
//! [`ListStore`] owns [`ListState`] exclusively. Every mutation goes through
//! one of its methods, and every method is total: a stale id or a blank draft
//! turns the call into a no-op instead of an error. The only fallible entry
//! point is [`ListStore::set_filter_str`], which parses untyped input.
//!
//! # Editing policy
//!
//! The draft is shared between "new item" and "edit item". When an edit
//! target is set, [`ListStore::submit`] replaces that item's text in place;
//! otherwise it prepends a new item. Deleting the edit target drops the edit
//! along with its draft, so a later submit creates a fresh item.
//!
//! # Example
//!
//! ```rust
//! use ztodo::app::{ListStore, SubmitOutcome};
//! use ztodo::domain::Filter;
//!
//! let mut store = ListStore::new();
//! store.set_draft("Buy milk");
//! let SubmitOutcome::Created(id) = store.submit() else { unreachable!() };
//!
//! store.toggle_complete(id);
//! store.set_filter(Filter::Active);
//! assert_eq!(store.visible_items().count(), 0);
//! ```

use crate::domain::{Filter, Item, ItemId, Result};

/// The complete list state. Only [`ListStore`] may mutate it.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Newest first. Edits keep position.
    items: Vec<Item>,
    /// Must reference an id in `items` when set.
    editing_id: Option<ItemId>,
    filter: Filter,
    dark_mode: bool,
    draft: String,
}

/// Result of [`ListStore::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new item was prepended.
    Created(ItemId),
    /// The edit target's text was replaced.
    Updated(ItemId),
    /// The edit target no longer exists; editing and the draft were cleared.
    ///
    /// Unreachable through the public API, since `delete_item` already drops
    /// an edit on its target. Kept so `submit` stays total if that changes.
    EditTargetMissing(ItemId),
    /// The trimmed draft was empty; state is unchanged.
    EmptyDraft,
}

/// Read-only view of the list state handed to the renderer after a mutation.
#[derive(Debug, Clone)]
pub struct ListSnapshot<'a> {
    /// Items passing the active filter, newest first.
    pub items: Vec<&'a Item>,
    pub editing_id: Option<ItemId>,
    pub filter: Filter,
    pub dark_mode: bool,
    pub draft: &'a str,
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Owner of [`ListState`] and the only way to change it.
#[derive(Debug, Clone)]
pub struct ListStore {
    state: ListState,
    next_id: u64,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            next_id: 1,
        }
    }

    /// Creates an empty store with an initial filter and display mode.
    #[must_use]
    pub fn with_display(filter: Filter, dark_mode: bool) -> Self {
        let mut store = Self::new();
        store.state.filter = filter;
        store.state.dark_mode = dark_mode;
        store
    }

    /// Replaces the draft verbatim.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    /// Submits the draft, either as a new item or as the edit target's new text.
    ///
    /// A draft that is empty after trimming leaves the state untouched. In
    /// every other case the draft and edit target are cleared afterwards.
    pub fn submit(&mut self) -> SubmitOutcome {
        let text = self.state.draft.trim();
        if text.is_empty() {
            tracing::debug!("ignoring blank draft");
            return SubmitOutcome::EmptyDraft;
        }
        let text = text.to_string();

        let outcome = match self.state.editing_id.take() {
            Some(id) => match self.find_mut(id) {
                Some(item) => {
                    item.text = text;
                    tracing::debug!(item_id = %id, "item text replaced");
                    SubmitOutcome::Updated(id)
                }
                None => {
                    tracing::debug!(item_id = %id, "edit target vanished before submit");
                    SubmitOutcome::EditTargetMissing(id)
                }
            },
            None => {
                let id = self.allocate_id();
                self.state.items.insert(0, Item::new(id, text));
                tracing::debug!(item_id = %id, total = self.state.items.len(), "item created");
                SubmitOutcome::Created(id)
            }
        };

        self.state.draft.clear();
        outcome
    }

    /// Flips `completed` on the item. Returns `false` if no such item exists.
    pub fn toggle_complete(&mut self, id: ItemId) -> bool {
        let Some(item) = self.find_mut(id) else {
            return false;
        };
        item.completed = !item.completed;
        tracing::debug!(item_id = %id, completed = item.completed, "item toggled");
        true
    }

    /// Removes the item. Deleting the edit target also drops the edit and its draft.
    ///
    /// Returns `false` if no such item exists.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.state.items.remove(pos);

        if self.state.editing_id == Some(id) {
            self.state.editing_id = None;
            self.state.draft.clear();
            tracing::debug!(item_id = %id, "deleted item was being edited, edit dropped");
        }
        tracing::debug!(item_id = %id, total = self.state.items.len(), "item deleted");
        true
    }

    /// Makes the item the edit target and loads its text into the draft.
    ///
    /// Returns `false` (and changes nothing) if no such item exists.
    pub fn start_edit(&mut self, id: ItemId) -> bool {
        let Some(text) = self.get(id).map(|item| item.text.clone()) else {
            return false;
        };
        self.state.editing_id = Some(id);
        self.state.draft = text;
        true
    }

    /// Drops the edit target and its draft. Returns `false` when not editing.
    pub fn cancel_edit(&mut self) -> bool {
        if self.state.editing_id.take().is_none() {
            return false;
        }
        self.state.draft.clear();
        true
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
    }

    /// Sets the filter from its name.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidFilter`](crate::domain::TodoError::InvalidFilter)
    /// for anything other than `all`, `active` or `completed`. The current filter
    /// is kept in that case.
    pub fn set_filter_str(&mut self, name: &str) -> Result<()> {
        self.state.filter = name.parse()?;
        Ok(())
    }

    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
    }

    /// Items passing the active filter, newest first.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted cheaply.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + Clone + '_ {
        let filter = self.state.filter;
        self.state.items.iter().filter(move |item| filter.matches(item))
    }

    /// Captures the state for one render pass.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot<'_> {
        let completed = self.state.items.iter().filter(|i| i.completed).count();
        ListSnapshot {
            items: self.visible_items().collect(),
            editing_id: self.state.editing_id,
            filter: self.state.filter,
            dark_mode: self.state.dark_mode,
            draft: &self.state.draft,
            total: self.state.items.len(),
            active: self.state.items.len() - completed,
            completed,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.state.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub const fn editing_id(&self) -> Option<ItemId> {
        self.state.editing_id
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.state.editing_id.is_some()
    }

    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.state.filter
    }

    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.state.dark_mode
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.state.items.iter().position(|item| item.id == id)
    }

    fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.state.items.iter_mut().find(|item| item.id == id)
    }
}
