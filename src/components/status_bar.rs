//! Status Bar Component

use leptos::prelude::*;

use crate::context::{AppContext, Status};

/// Outcome of the last server action, dismissable
#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    move || {
        ctx.status.get().map(|status| {
            let (class, text) = match status {
                Status::Info(text) => ("alert alert-success status", text),
                Status::Error(text) => ("alert alert-danger status", text),
            };
            view! {
                <div class=class role="status">
                    <span>{text}</span>
                    <button class="close-btn" on:click=move |_| ctx.status.set(None)>"×"</button>
                </div>
            }
        })
    }
}
