//! View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the last
//! projection of `ListState`; components only read from here.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_list_core::{FormState, ListState, Row};

/// What the page shows, field by field
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Rows in display order, including hidden ones
    pub rows: Vec<Row>,
    /// Add/update form
    pub form: FormState,
    /// Clear button and filter visibility
    pub controls_visible: bool,
    /// Remove icon classes, fixed for the session
    pub remove_icon: String,
}

impl AppState {
    pub fn new(state: &ListState, remove_icon: &str) -> Self {
        Self {
            rows: state.rows.rows().to_vec(),
            form: state.form.clone(),
            controls_visible: state.controls_visible,
            remove_icon: remove_icon.to_string(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Copy a new `ListState` into the store, touching only changed fields
pub fn store_sync(store: &AppStore, state: &ListState) {
    if store.rows().read_untracked().as_slice() != state.rows.rows() {
        *store.rows().write() = state.rows.rows().to_vec();
    }
    if *store.form().read_untracked() != state.form {
        *store.form().write() = state.form.clone();
    }
    if store.controls_visible().get_untracked() != state.controls_visible {
        *store.controls_visible().write() = state.controls_visible;
    }
}
