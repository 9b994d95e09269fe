//! Editable Cell Component
//!
//! Table cell that turns into a text input on double-click.

use leptos::html;
use leptos::prelude::*;

/// Double-click to edit; blur or Enter commits
///
/// Props:
/// - value: text shown while not editing
/// - on_commit: receives the input's text
#[component]
pub fn EditableCell(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_commit: Callback<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Focus the input once it is mounted
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Enter removes the input, which can also fire blur; commit once
    let commit = move || {
        if editing.get_untracked() {
            set_editing.set(false);
            on_commit.run(draft.get_untracked());
        }
    };

    view! {
        <td
            class="editable"
            on:dblclick=move |_| {
                if !editing.get_untracked() {
                    set_draft.set(value.get_untracked());
                    set_editing.set(true);
                }
            }
        >
            {move || if editing.get() {
                view! {
                    <input
                        type="text"
                        style="width: 100%"
                        node_ref=input_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:blur=move |_| commit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                commit();
                            }
                        }
                    />
                }.into_any()
            } else {
                value.get().into_any()
            }}
        </td>
    }
}
