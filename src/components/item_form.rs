//! Item Form Component
//!
//! Text input plus a submit button that switches between add and update.

use leptos::html::Input;
use leptos::prelude::*;
use shopping_list_core::FormState;

use crate::context::use_list;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_list();
    let form = ctx.view.form();
    let input_ref = NodeRef::<Input>::new();

    // Refocus only when the form asks for it (after add/remove/clear/edit),
    // not on every form write
    let focus_generation = Memo::new(move |_| form.with(|f: &FormState| f.focus_generation));
    Effect::new(move |_| {
        focus_generation.track();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(input) = input_ref.get_untracked() {
            ctx.set_input(input.value());
        }
        ctx.submit();
    };

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    name="item"
                    placeholder="Enter Item"
                    node_ref=input_ref
                    prop:value=move || form.with(|f| f.input.clone())
                    on:input=move |ev| ctx.set_input(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <button
                    type="submit"
                    class="btn"
                    style=move || form.with(|f| format!("background-color: {}", f.button_color))
                >
                    <i class=move || form.with(|f| f.button_icon.clone())></i>
                    " "
                    {move || form.with(|f| f.button_label.clone())}
                </button>
            </div>
        </form>
    }
}
