//! List Manager
//!
//! State machine over `EditMode`:
//!
//! - `Idle` + valid submit: add the item
//! - `Editing(id)` + valid submit: replace the item, back to `Idle`
//! - click on a row body: `Editing(row)`
//! - confirmed remove or clear-all: `Idle`
//!
//! Empty or duplicate submits alert the user and leave everything untouched.

use log::{debug, info, warn};

use super::{Dialogs, EditMode, ListState};
use crate::config::ListConfig;
use crate::domain::{Item, ItemId, ItemIdAllocator, ListError, ListResult};
use crate::store::{ItemStore, KeyValueStore};

/// Which part of a row was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    /// The text area; starts editing
    Body,
    /// The remove affordance
    Remove,
}

/// What a handler did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loaded(usize),
    Added(ItemId),
    Updated { old: ItemId, new: ItemId },
    Editing(ItemId),
    Removed(ItemId),
    /// The user declined the removal prompt
    Cancelled,
    Cleared,
    Filtered { visible: usize },
    /// The click referred to a row that no longer exists
    Ignored,
}

pub struct ListManager<S, D> {
    store: ItemStore<S>,
    dialogs: D,
    config: ListConfig,
    ids: ItemIdAllocator,
}

impl<S: KeyValueStore, D: Dialogs> ListManager<S, D> {
    pub fn new(backend: S, dialogs: D, config: ListConfig) -> Self {
        let store = ItemStore::new(backend, config.storage_key.clone());
        Self { store, dialogs, config, ids: ItemIdAllocator::new() }
    }

    pub fn store(&self) -> &ItemStore<S> {
        &self.store
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// Fresh state for this manager's configuration
    pub fn new_state(&self) -> ListState {
        ListState::new(&self.config)
    }

    /// Render the stored items into an empty view
    pub fn init(&mut self, state: &mut ListState) -> ListResult<Outcome> {
        let items = self.store.load_all()?;
        let count = items.len();
        let ids = &mut self.ids;
        state.rows.render_all(items.into_iter().map(|text| Item::new(ids.next_id(), text)));
        self.refresh(state);
        info!("[LIST] loaded {} items", count);
        Ok(Outcome::Loaded(count))
    }

    pub fn set_input(&self, state: &mut ListState, text: &str) {
        state.form.input = text.to_string();
    }

    /// Add the input text, or replace the edited item with it
    pub fn submit(&mut self, state: &mut ListState) -> ListResult<Outcome> {
        let text = state.form.input.clone();
        if text.is_empty() {
            self.dialogs.alert(&self.config.empty_input_message);
            return Err(ListError::EmptyInput);
        }
        if self.store.contains(&text)? {
            self.dialogs.alert(&self.config.duplicate_message);
            return Err(ListError::DuplicateItem(text));
        }

        let replaced = match state.form.mode {
            EditMode::Editing(old) => match state.rows.find(old) {
                Some(row) => Some((old, row.text.clone())),
                None => {
                    warn!("[LIST] edit target {} vanished, adding instead", old);
                    None
                }
            },
            EditMode::Idle => None,
        };

        // Storage first: on failure the rows are still untouched
        self.store.replace_after_sort(replaced.as_ref().map(|(_, old_text)| old_text.as_str()), &text)?;
        if let Some((old, _)) = &replaced {
            state.rows.remove(*old);
        }
        let id = self.ids.next_id();
        state.rows.sort_visible();
        state.rows.render_row(Item::new(id, text.as_str()));
        self.refresh(state);

        Ok(match replaced {
            Some((old, _)) => {
                info!("[LIST] updated {} -> {} '{}'", old, id, text);
                Outcome::Updated { old, new: id }
            }
            None => {
                info!("[LIST] added {} '{}'", id, text);
                Outcome::Added(id)
            }
        })
    }

    /// Click on a row: remove it (after confirmation) or start editing it
    pub fn click_row(&mut self, state: &mut ListState, id: ItemId, target: RowTarget) -> ListResult<Outcome> {
        match target {
            RowTarget::Remove => self.remove(state, id),
            RowTarget::Body => {
                let Some(text) = state.rows.find(id).map(|row| row.text.clone()) else {
                    return Ok(Outcome::Ignored);
                };
                state.rows.mark_editing(id);
                state.form.begin_edit(&self.config, id, &text);
                debug!("[LIST] editing {} '{}'", id, text);
                Ok(Outcome::Editing(id))
            }
        }
    }

    /// Wipe every row and the stored collection
    pub fn clear_all(&mut self, state: &mut ListState) -> ListResult<Outcome> {
        self.store.clear()?;
        state.rows.clear();
        self.refresh(state);
        Ok(Outcome::Cleared)
    }

    /// Recompute row visibility for a new filter text
    pub fn filter(&self, state: &mut ListState, text: &str) -> Outcome {
        state.rows.set_filter(text);
        let visible = state.rows.visible_count();
        debug!("[LIST] filter '{}' shows {}/{}", text, visible, state.rows.len());
        Outcome::Filtered { visible }
    }

    fn remove(&mut self, state: &mut ListState, id: ItemId) -> ListResult<Outcome> {
        let Some(text) = state.rows.find(id).map(|row| row.text.clone()) else {
            return Ok(Outcome::Ignored);
        };
        if !self.dialogs.confirm(&self.config.confirm_remove_message) {
            debug!("[LIST] removal of {} declined", id);
            return Ok(Outcome::Cancelled);
        }
        self.store.remove_by_text(&text)?;
        state.rows.remove(id);
        self.refresh(state);
        Ok(Outcome::Removed(id))
    }

    /// Normalize affordances and the form after add, remove, clear and load
    fn refresh(&self, state: &mut ListState) {
        state.controls_visible = !state.rows.is_empty();
        state.rows.clear_marker();
        state.form.reset(&self.config);
    }
}
