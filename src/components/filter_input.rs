//! Filter Input Component

use leptos::prelude::*;

use super::display_if;
use crate::context::use_list;
use crate::store::AppStateStoreFields;

/// Case-insensitive filter over the rows; hidden while the list is empty
#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_list();
    let controls_visible = ctx.view.controls_visible();

    view! {
        <div
            class="filter"
            style=move || format!("display: {}", display_if(controls_visible.get(), "block"))
        >
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                on:input=move |ev| ctx.filter(event_target_value(&ev))
            />
        </div>
    }
}
