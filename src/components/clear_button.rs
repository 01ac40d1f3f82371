//! Clear Button Component

use leptos::prelude::*;

use super::display_if;
use crate::context::use_list;
use crate::store::AppStateStoreFields;

#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_list();
    let controls_visible = ctx.view.controls_visible();

    view! {
        <button
            id="clear"
            class="btn-clear"
            style=move || format!("display: {}", display_if(controls_visible.get(), "block"))
            on:click=move |_| ctx.clear_all()
        >
            "Clear All"
        </button>
    }
}
