//! Order Table Component

use leptos::prelude::*;

use crate::components::OrderRow;
use crate::store::{store_codes, store_summary, use_order_store};

#[component]
pub fn OrderTable() -> impl IntoView {
    let store = use_order_store();

    view! {
        <table id="itemTable" class="table table-bordered">
            <thead>
                <tr>
                    <th>"Item Code"</th>
                    <th>"Description"</th>
                    <th>"Quantity"</th>
                    <th>"UoM"</th>
                    <th>"Notes"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store_codes(&store)
                    key=|code| code.clone()
                    children=move |code| view! { <OrderRow code=code /> }
                />
            </tbody>
        </table>
        <p class="item-count">
            {move || {
                let (lines, total) = store_summary(&store);
                format!("{} lines, {} units", lines, total)
            }}
        </p>
    }
}
