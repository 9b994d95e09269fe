//! Item Search Input Component
//!
//! Text input that feeds the shared suggestion dropdown. Keystrokes are
//! debounced; focusing an input that already holds a query re-opens it.

use leptos::prelude::*;
use leptos_debounce::{debounce, DebounceGate};

use crate::context::{ActiveInput, AppContext};
use crate::store::use_order_store;

/// Search-as-you-type input bound to one of the two input slots
///
/// Props:
/// - input: which slot this is (decides what picking a suggestion does)
/// - id: DOM id, used by the click-outside check
#[component]
pub fn ItemSearchInput(
    input: ActiveInput,
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_order_store();
    let value = ctx.value_of(input);
    let node_ref = ctx.node_of(input);

    let debounce_ms = ctx.config.with_value(|c| c.debounce_ms);
    let on_quiet = debounce(DebounceGate::new(), debounce_ms, move |query: String| {
        ctx.active_input.set(Some(input));
        ctx.update_suggestions(query);
    });

    let on_focus = move |_| {
        let query = value.get_untracked();
        if ctx.config.with_value(|c| c.is_searchable(&query)) {
            ctx.active_input.set(Some(input));
            ctx.update_suggestions(query);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ctx.handle_key(&store, input, &ev.key()) {
            ev.prevent_default();
        }
    };

    view! {
        <input
            type="text"
            class="form-control"
            id=id
            placeholder=placeholder
            autocomplete="off"
            node_ref=node_ref
            prop:value=move || value.get()
            on:input=move |ev| {
                let query = event_target_value(&ev);
                value.set(query.clone());
                on_quiet(query);
            }
            on:focus=on_focus
            on:keydown=on_keydown
        />
    }
}
