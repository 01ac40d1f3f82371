//! Item List Component
//!
//! Renders every row of the view store in order. Hidden rows stay mounted.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_list;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_list();
    let rows = ctx.view.rows();

    view! {
        <ul id="item-list" class="items">
            <For
                each=move || rows.get()
                key=|row| (row.id, row.visible, row.editing)
                children=move |row| view! { <ItemRow row=row /> }
            />
        </ul>
    }
}
