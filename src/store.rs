//! Order State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_debounce::flash;
use reactive_stores::Store;

use crate::models::InventoryItem;
use crate::order::{self, AddOutcome, EditableField, ExportRow, OrderLine};

/// Order table state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct OrderState {
    /// Table rows, in insertion order
    pub lines: Vec<OrderLine>,
    /// Codes of rows currently highlighted (one entry per running highlight)
    pub flashing: Vec<String>,
}

/// Type alias for the store
pub type OrderStore = Store<OrderState>;

/// Get the order store from context
pub fn use_order_store() -> OrderStore {
    expect_context::<OrderStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add `quantity` of `item` (or bump its row) and highlight the row
pub fn store_add_item(store: &OrderStore, item: &InventoryItem, quantity: i64, highlight_ms: u32) -> AddOutcome {
    let outcome = order::add_item(&mut store.lines().write(), item, quantity);
    web_sys::console::log_1(&format!("[ORDER] {:?} {} (+{})", outcome, item.code, quantity).into());
    store_flash_row(store, &item.code, highlight_ms);
    outcome
}

/// Highlight a row for `duration_ms`
pub fn store_flash_row(store: &OrderStore, code: &str, duration_ms: u32) {
    let store = *store;
    let on_code = code.to_string();
    let off_code = code.to_string();
    flash(
        duration_ms,
        move || store.flashing().write().push(on_code),
        move || {
            // store may be gone if the app unmounted
            if let Some(mut flashing) = store.flashing().try_write() {
                if let Some(pos) = flashing.iter().position(|c| *c == off_code) {
                    flashing.remove(pos);
                }
            }
        },
    );
}

/// Remove a row by code
pub fn store_remove_line(store: &OrderStore, code: &str) {
    if order::remove_line(&mut store.lines().write(), code) {
        web_sys::console::log_1(&format!("[ORDER] Removed {}", code).into());
    }
}

/// Commit an edited cell
pub fn store_set_field(store: &OrderStore, code: &str, field: EditableField, value: String) {
    order::set_field(&mut store.lines().write(), code, field, value);
}

/// Row for `code`, tracked
pub fn store_line(store: &OrderStore, code: &str) -> Option<OrderLine> {
    store.lines().with(|lines| lines.iter().find(|l| l.code == code).cloned())
}

/// Row codes in display order, tracked
pub fn store_codes(store: &OrderStore) -> Vec<String> {
    store.lines().with(|lines| lines.iter().map(|l| l.code.clone()).collect())
}

pub fn store_is_flashing(store: &OrderStore, code: &str) -> bool {
    store.flashing().with(|f| f.iter().any(|c| c == code))
}

/// (line count, total quantity), tracked
pub fn store_summary(store: &OrderStore) -> (usize, i64) {
    store.lines().with(|lines| (lines.len(), order::total_quantity(lines)))
}

/// Current rows in export shape
pub fn store_export_rows(store: &OrderStore, warehouse: &str) -> Vec<ExportRow> {
    store.lines().with_untracked(|lines| order::export_rows(lines, warehouse))
}
