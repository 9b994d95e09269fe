//! Order Row Component

use leptos::prelude::*;

use crate::components::EditableCell;
use crate::order::{EditableField, OrderLine};
use crate::store::{store_is_flashing, store_line, store_remove_line, store_set_field, use_order_store};

/// One table row, looked up by item code
#[component]
pub fn OrderRow(code: String) -> impl IntoView {
    let store = use_order_store();

    let line = {
        let code = code.clone();
        Memo::new(move |_| store_line(&store, &code).unwrap_or_default())
    };
    let cell_text = move |f: fn(&OrderLine) -> String| Signal::derive(move || line.with(f));

    let commit = |field: EditableField| {
        let code = code.clone();
        Callback::new(move |value: String| store_set_field(&store, &code, field, value))
    };
    let on_quantity = commit(EditableField::Quantity);
    let on_notes = commit(EditableField::Notes);

    let flash_code = code.clone();
    let row_class = move || {
        if store_is_flashing(&store, &flash_code) { "order-row flash" } else { "order-row" }
    };

    view! {
        <tr class=row_class>
            <td>{move || line.with(|l| l.code.clone())}</td>
            <td>{move || line.with(|l| l.description.clone())}</td>
            <EditableCell value=cell_text(|l| l.quantity.clone()) on_commit=on_quantity />
            <td>{move || line.with(|l| l.uom.clone())}</td>
            <EditableCell value=cell_text(|l| l.notes.clone()) on_commit=on_notes />
            <td>
                <button
                    class="btn btn-sm btn-danger delete-btn"
                    on:click=move |_| store_remove_line(&store, &code)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
