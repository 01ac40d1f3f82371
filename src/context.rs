//! Application Context
//!
//! The list session (controller plus state) and the view store, provided
//! via the Leptos Context API.

use leptos::prelude::*;
use log::{debug, error};
use shopping_list_core::{
    ItemId, KeyValueStore, ListConfig, ListManager, ListResult, ListState, Outcome, RowTarget,
};

use crate::dialogs::BrowserDialogs;
use crate::store::{store_sync, AppState, AppStore};

type Manager = ListManager<Box<dyn KeyValueStore>, BrowserDialogs>;

/// Controller and the state value it operates on
pub struct Session {
    manager: Manager,
    state: ListState,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    session: StoredValue<Session, LocalStorage>,
    /// Projection the components render from
    pub view: AppStore,
}

impl ListContext {
    /// Load the stored list and build the view store
    pub fn new(backend: Box<dyn KeyValueStore>, config: ListConfig) -> Self {
        let remove_icon = config.remove_icon.clone();
        let mut manager = ListManager::new(backend, BrowserDialogs, config);
        let mut state = manager.new_state();
        if let Err(e) = manager.init(&mut state) {
            error!("[APP] could not load stored items: {}", e);
        }
        let view = AppStore::new(AppState::new(&state, &remove_icon));
        Self {
            session: StoredValue::new_local(Session { manager, state }),
            view,
        }
    }

    /// Run a handler against the session, then refresh the view store
    fn dispatch<F>(&self, action: &str, handler: F)
    where
        F: FnOnce(&mut Manager, &mut ListState) -> ListResult<Outcome>,
    {
        let mut result = None;
        self.session.update_value(|session| {
            result = Some(handler(&mut session.manager, &mut session.state));
        });
        match result {
            Some(Ok(outcome)) => debug!("[APP] {}: {:?}", action, outcome),
            Some(Err(e)) if e.is_user_error() => debug!("[APP] {} rejected: {}", action, e),
            Some(Err(e)) => error!("[APP] {} failed: {}", action, e),
            None => return,
        }
        self.sync();
    }

    fn sync(&self) {
        let view = self.view;
        self.session.with_value(|session| store_sync(&view, &session.state));
    }

    pub fn set_input(&self, text: String) {
        self.session.update_value(|session| session.manager.set_input(&mut session.state, &text));
    }

    pub fn submit(&self) {
        self.dispatch("submit", |manager, state| manager.submit(state));
    }

    pub fn click_row(&self, id: ItemId, target: RowTarget) {
        self.dispatch("click", |manager, state| manager.click_row(state, id, target));
    }

    pub fn clear_all(&self) {
        self.dispatch("clear", |manager, state| manager.clear_all(state));
    }

    pub fn filter(&self, text: String) {
        self.dispatch("filter", |manager, state| Ok(manager.filter(state, &text)));
    }
}

/// Get the list context
pub fn use_list() -> ListContext {
    expect_context::<ListContext>()
}
