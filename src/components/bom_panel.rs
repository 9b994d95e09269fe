//! Bill of Materials Panel
//!
//! Fetch an item's components into the order table, and record new
//! parent/children associations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bom::{bom_additions, AssociationDraft};
use crate::commands;
use crate::components::ItemSearchInput;
use crate::context::{ActiveInput, AppContext, Status};
use crate::models::BomReply;
use crate::store::{store_add_item, use_order_store};

#[component]
pub fn BomPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_order_store();

    let (parent_code, set_parent_code) = signal(String::new());
    let (parent_qty, set_parent_qty) = signal(String::from("1"));
    let (children, set_children) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_fetch = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let code = ctx.fetch_value.get_untracked().trim().to_string();
        if code.is_empty() {
            ctx.set_status(Status::Error("Pick an item code to fetch".to_string()));
            return;
        }
        let config = ctx.config.get_value();
        set_busy.set(true);
        spawn_local(async move {
            let outcome = match commands::fetch_bom(&config, &code).await {
                Ok(BomReply::Found { parent, children }) => {
                    for (item, quantity) in bom_additions(&parent, &children) {
                        store_add_item(&store, &item, quantity, config.highlight_ms);
                    }
                    Ok(format!("Added {} with {} component(s)", parent.item.code, children.len()))
                }
                Ok(BomReply::Missing { error }) => Err(format!("{}: {}", code, error)),
                Err(e) => Err(format!("Failed to fetch {}: {}", code, e)),
            };
            ctx.report("BOM", outcome);
            set_busy.set(false);
        });
    };

    let on_associate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match AssociationDraft::from_form(
            &parent_code.get_untracked(),
            &parent_qty.get_untracked(),
            &children.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(e) => {
                ctx.set_status(Status::Error(e));
                return;
            }
        };
        let config = ctx.config.get_value();
        set_busy.set(true);
        spawn_local(async move {
            let outcome = commands::associate_items(&config, &draft).await;
            if outcome.is_ok() {
                set_children.set(String::new());
            }
            ctx.report("BOM", outcome);
            set_busy.set(false);
        });
    };

    view! {
        <section class="bom-panel">
            <form class="fetch-form" on:submit=on_fetch>
                <ItemSearchInput
                    input=ActiveInput::Fetch
                    id="fetchInput"
                    placeholder="Find a kit by description..."
                />
                <button type="submit" class="btn btn-secondary" disabled=move || busy.get()>"Fetch"</button>
            </form>

            <form class="associate-form" on:submit=on_associate>
                <input
                    type="text"
                    class="form-control"
                    placeholder="Parent item code"
                    prop:value=move || parent_code.get()
                    on:input=move |ev| set_parent_code.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="1"
                    class="form-control"
                    prop:value=move || parent_qty.get()
                    on:input=move |ev| set_parent_qty.set(event_target_value(&ev))
                />
                <textarea
                    class="form-control"
                    placeholder="CODE:QTY, one per line or comma separated"
                    prop:value=move || children.get()
                    on:input=move |ev| set_children.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-secondary" disabled=move || busy.get()>"Associate"</button>
            </form>
        </section>
    }
}
