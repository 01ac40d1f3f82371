//! Item Row Component
//!
//! A single list row: clicking the text edits it, the x button removes it.

use leptos::prelude::*;
use shopping_list_core::{Row, RowTarget};

use crate::context::use_list;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemRow(row: Row) -> impl IntoView {
    let ctx = use_list();
    let remove_icon = ctx.view.remove_icon().get_untracked();
    let id = row.id;

    view! {
        <li
            class=if row.editing { "edit-item" } else { "" }
            style=if row.visible { "display: flex" } else { "display: none" }
            on:click=move |_| ctx.click_row(id, RowTarget::Body)
        >
            {row.text}
            <button
                class="remove-item btn-link text-red"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.click_row(id, RowTarget::Remove);
                }
            >
                <i class=remove_icon></i>
            </button>
        </li>
    }
}
