//! Suggestion List Component
//!
//! The dropdown shared by both search inputs, anchored under the active one.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::highlight::{highlight_segments, suggestion_label};
use crate::store::use_order_store;

#[component]
pub fn SuggestionList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_order_store();

    view! {
        <ul id="suggestionList" class="list-group" style=move || ctx.position.get().style()>
            {move || {
                let query = ctx.suggestion_query.get();
                ctx.suggestions.get().into_iter().enumerate().map(|(i, item)| {
                    let label = suggestion_label(&item.code, &item.description);
                    // hover only touches these attributes, not the list
                    let is_selected = move || ctx.selected.get() == Some(i);
                    view! {
                        <li
                            class=move || if is_selected() { "list-group-item suggestion-item active" } else { "list-group-item suggestion-item" }
                            style=move || if is_selected() { "cursor: pointer; background-color: #f0f0f0;" } else { "cursor: pointer;" }
                            on:mouseover=move |_| ctx.selected.set(Some(i))
                            on:mouseout=move |_| ctx.selected.set(None)
                            on:click=move |_| ctx.pick_index(&store, i)
                        >
                            {highlight_segments(&label, &query).into_iter().map(|seg| {
                                if seg.matched {
                                    view! { <strong>{seg.text}</strong> }.into_any()
                                } else {
                                    seg.text.into_any()
                                }
                            }).collect_view()}
                        </li>
                    }
                }).collect_view()
            }}
        </ul>
    }
}
