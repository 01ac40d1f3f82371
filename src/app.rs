//! Shopping List App
//!
//! Single-column layout: form, filter, list, clear button.

use leptos::prelude::*;

use crate::components::{ClearButton, FilterInput, ItemForm, ItemList};
use crate::config;
use crate::context::ListContext;
use crate::storage::browser_store;

#[component]
pub fn App() -> impl IntoView {
    let ctx = ListContext::new(browser_store(), config::load());
    provide_context(ctx);

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>
            <ItemForm />
            <FilterInput />
            <ItemList />
            <ClearButton />
        </div>
    }
}
