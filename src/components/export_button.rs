//! Export Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, Status};
use crate::store::{store_export_rows, use_order_store};

/// Sends the current table to the spreadsheet export
#[component]
pub fn ExportButton() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_order_store();
    let (exporting, set_exporting) = signal(false);

    let on_click = move |_| {
        let config = ctx.config.get_value();
        let rows = store_export_rows(&store, &config.warehouse);
        if rows.is_empty() {
            ctx.set_status(Status::Error("Nothing to export".to_string()));
            return;
        }
        set_exporting.set(true);
        spawn_local(async move {
            let outcome = commands::export_items(&config, &rows)
                .await
                .map_err(|e| format!("Failed to export data: {}", e));
            ctx.report("EXPORT", outcome);
            set_exporting.set(false);
        });
    };

    view! {
        <button class="btn btn-primary export-btn" on:click=on_click disabled=move || exporting.get()>
            {move || if exporting.get() { "Exporting..." } else { "Export" }}
        </button>
    }
}
