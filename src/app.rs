//! Order Builder App
//!
//! Main application component: search, order table, BOM tools and export.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::components::{BomPanel, ExportButton, ItemSearchInput, OrderTable, StatusBar, SuggestionList};
use crate::config::WidgetConfig;
use crate::context::{ActiveInput, AppContext};
use crate::store::OrderState;

/// Elements a click may land on without closing the dropdown
const DROPDOWN_OWNERS: &str = "#searchInput, #fetchInput, #suggestionList";

#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::from_document();
    #[cfg(debug_assertions)]
    web_sys::console::log_1(&format!("[CONFIG] {:?}", config).into());

    let ctx = AppContext::new(config);
    provide_context(ctx);
    provide_context(Store::new(OrderState::default()));

    // Close suggestions when clicking outside
    let _ = window_event_listener(ev::click, move |ev| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(DROPDOWN_OWNERS).ok().flatten())
            .is_some();
        if !inside {
            ctx.clear_suggestions();
        }
    });

    view! {
        <main class="container order-builder">
            <h1>"Order Builder"</h1>

            <div class="search-row">
                <ItemSearchInput
                    input=ActiveInput::Search
                    id="searchInput"
                    placeholder="Search items by description..."
                />
            </div>
            <SuggestionList />

            <OrderTable />

            <div class="actions-row">
                <ExportButton />
            </div>

            <BomPanel />

            <StatusBar />
        </main>
    }
}
