//! Application Context
//!
//! Shared state provided via Leptos Context API: the two search inputs, the
//! suggestion dropdown they share, and the status line.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::DebounceGate;

use crate::commands;
use crate::config::WidgetConfig;
use crate::models::InventoryItem;
use crate::store::{store_add_item, OrderStore};

/// Which input the dropdown belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveInput {
    /// Picking adds the item to the order table
    Search,
    /// Picking fills in the item code
    Fetch,
}

/// Dropdown placement in page coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DropdownPosition {
    pub top: f64,
    pub left: f64,
    /// None until first anchored (list spans its container)
    pub width: Option<f64>,
}

impl DropdownPosition {
    pub fn style(&self) -> String {
        let width = match self.width {
            Some(w) => format!("{}px", w),
            None => "100%".to_string(),
        };
        format!(
            "position: absolute; max-height: 200px; overflow-y: auto; z-index: 1000; top: {}px; left: {}px; width: {};",
            self.top, self.left, width
        )
    }
}

/// Outcome of the last fetch/associate/export call
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Keyboard movement through `len` suggestions
pub fn step_selection(current: Option<usize>, len: usize, down: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, down) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(i), true) => Some((i + 1).min(len - 1)),
        (Some(i), false) => Some(i.saturating_sub(1)),
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<WidgetConfig>,
    /// Input that last asked for suggestions
    pub active_input: RwSignal<Option<ActiveInput>>,
    pub search_value: RwSignal<String>,
    pub fetch_value: RwSignal<String>,
    pub search_ref: NodeRef<html::Input>,
    pub fetch_ref: NodeRef<html::Input>,
    /// Current suggestions and the query that produced them
    pub suggestions: RwSignal<Vec<InventoryItem>>,
    pub suggestion_query: RwSignal<String>,
    pub selected: RwSignal<Option<usize>>,
    pub position: RwSignal<DropdownPosition>,
    pub status: RwSignal<Option<Status>>,
    /// Guards against responses for superseded queries
    requests: DebounceGate,
}

impl AppContext {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            active_input: RwSignal::new(None),
            search_value: RwSignal::new(String::new()),
            fetch_value: RwSignal::new(String::new()),
            search_ref: NodeRef::new(),
            fetch_ref: NodeRef::new(),
            suggestions: RwSignal::new(Vec::new()),
            suggestion_query: RwSignal::new(String::new()),
            selected: RwSignal::new(None),
            position: RwSignal::new(DropdownPosition::default()),
            status: RwSignal::new(None),
            requests: DebounceGate::new(),
        }
    }

    pub fn value_of(&self, input: ActiveInput) -> RwSignal<String> {
        match input {
            ActiveInput::Search => self.search_value,
            ActiveInput::Fetch => self.fetch_value,
        }
    }

    pub fn node_of(&self, input: ActiveInput) -> NodeRef<html::Input> {
        match input {
            ActiveInput::Search => self.search_ref,
            ActiveInput::Fetch => self.fetch_ref,
        }
    }

    /// Query `/search` and show the results under the active input.
    ///
    /// Short queries clear the list without a request. Failures are logged
    /// and leave the list as it was.
    pub fn update_suggestions(&self, query: String) {
        let config = self.config.get_value();
        if !config.is_searchable(&query) {
            self.clear_suggestions();
            return;
        }

        let ctx = *self;
        let request = self.requests.latest(async move {
            let result = commands::search_items(&config, &query).await;
            (query, result)
        });
        spawn_local(async move {
            match request.await {
                Some((query, Ok(items))) => ctx.show_suggestions(query, items),
                Some((_, Err(e))) => {
                    web_sys::console::error_1(&format!("[SEARCH] Error fetching suggestions: {}", e).into());
                }
                None => {
                    #[cfg(debug_assertions)]
                    web_sys::console::log_1(&"[SEARCH] Dropped stale results".into());
                }
            }
        });
    }

    fn show_suggestions(&self, query: String, items: Vec<InventoryItem>) {
        #[cfg(debug_assertions)]
        web_sys::console::log_1(&format!("[SEARCH] {} suggestions for {:?}", items.len(), query).into());

        if let Some(position) = self.anchor_position() {
            self.position.set(position);
        }
        self.suggestion_query.set(query);
        self.selected.set(None);
        self.suggestions.set(items);
    }

    /// Below the active input, in page coordinates
    fn anchor_position(&self) -> Option<DropdownPosition> {
        let input = self.node_of(self.active_input.get_untracked()?).get_untracked()?;
        let window = web_sys::window()?;
        let rect = input.get_bounding_client_rect();
        Some(DropdownPosition {
            top: rect.bottom() + window.scroll_y().unwrap_or(0.0),
            left: rect.left() + window.scroll_x().unwrap_or(0.0),
            width: Some(rect.width()),
        })
    }

    /// Empty the dropdown and drop any request still in flight
    pub fn clear_suggestions(&self) {
        self.requests.cancel();
        self.suggestions.set(Vec::new());
        self.selected.set(None);
    }

    pub fn has_suggestions(&self) -> bool {
        self.suggestions.with_untracked(|s| !s.is_empty())
    }

    /// Apply a chosen suggestion to whichever input is active
    pub fn pick(&self, store: &OrderStore, item: InventoryItem) {
        match self.active_input.get_untracked() {
            Some(ActiveInput::Search) => {
                let highlight_ms = self.config.with_value(|c| c.highlight_ms);
                store_add_item(store, &item, 1, highlight_ms);
                self.search_value.set(String::new());
            }
            Some(ActiveInput::Fetch) => self.fetch_value.set(item.code),
            None => {}
        }
        self.clear_suggestions();
    }

    pub fn pick_index(&self, store: &OrderStore, index: usize) {
        let item = self.suggestions.with_untracked(|s| s.get(index).cloned());
        if let Some(item) = item {
            self.pick(store, item);
        }
    }

    /// Arrow/Enter/Escape handling for `input`; true if the key was consumed
    pub fn handle_key(&self, store: &OrderStore, input: ActiveInput, key: &str) -> bool {
        if self.active_input.get_untracked() != Some(input) || !self.has_suggestions() {
            return false;
        }
        let len = self.suggestions.with_untracked(Vec::len);
        match key {
            "ArrowDown" | "ArrowUp" => {
                let next = step_selection(self.selected.get_untracked(), len, key == "ArrowDown");
                self.selected.set(next);
                true
            }
            "Enter" => match self.selected.get_untracked() {
                Some(i) => {
                    self.pick_index(store, i);
                    true
                }
                None => false,
            },
            "Escape" => {
                self.clear_suggestions();
                true
            }
            _ => false,
        }
    }

    pub fn set_status(&self, status: Status) {
        self.status.set(Some(status));
    }

    /// Show a server outcome in the status line and log it under `tag`
    pub fn report(&self, tag: &str, outcome: Result<String, String>) {
        match outcome {
            Ok(message) => {
                web_sys::console::log_1(&format!("[{}] {}", tag, message).into());
                self.set_status(Status::Info(message));
            }
            Err(error) => {
                web_sys::console::error_1(&format!("[{}] {}", tag, error).into());
                self.set_status(Status::Error(error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_selection() {
        assert_eq!(step_selection(None, 0, true), None);
        assert_eq!(step_selection(None, 3, true), Some(0));
        assert_eq!(step_selection(None, 3, false), Some(2));
        assert_eq!(step_selection(Some(0), 3, true), Some(1));
        assert_eq!(step_selection(Some(2), 3, true), Some(2));
        assert_eq!(step_selection(Some(0), 3, false), Some(0));
        assert_eq!(step_selection(Some(2), 3, false), Some(1));
    }

    #[test]
    fn test_dropdown_style() {
        let unanchored = DropdownPosition::default();
        assert!(unanchored.style().contains("width: 100%;"));

        let anchored = DropdownPosition { top: 120.5, left: 16.0, width: Some(300.0) };
        let style = anchored.style();
        assert!(style.contains("top: 120.5px;"));
        assert!(style.contains("left: 16px;"));
        assert!(style.contains("width: 300px;"));
        assert!(style.contains("max-height: 200px;"));
    }

    #[test]
    fn test_clear_with_empty_list_still_drops_in_flight_request() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(WidgetConfig::default());
            let in_flight = ctx.requests.arm();
            assert!(!ctx.has_suggestions());

            ctx.clear_suggestions();
            assert!(!ctx.requests.is_current(in_flight));
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::store::{store_codes, store_line, OrderState};
    use reactive_stores::Store;
    use wasm_bindgen_test::*;

    fn item(code: &str) -> InventoryItem {
        InventoryItem {
            code: code.to_string(),
            description: format!("Item {}", code),
            uom: "EA".to_string(),
        }
    }

    fn open_list(ctx: &AppContext, input: ActiveInput, typed: &str, items: Vec<InventoryItem>) {
        ctx.active_input.set(Some(input));
        ctx.value_of(input).set(typed.to_string());
        ctx.suggestions.set(items);
    }

    #[wasm_bindgen_test]
    fn test_pick_from_search_adds_row_and_clears_input() {
        let ctx = AppContext::new(WidgetConfig::default());
        let store = Store::new(OrderState::default());

        open_list(&ctx, ActiveInput::Search, "bol", vec![item("BOLT")]);
        ctx.pick(&store, item("BOLT"));

        assert_eq!(store_codes(&store), vec!["BOLT".to_string()]);
        assert_eq!(store_line(&store, "BOLT").unwrap().quantity, "1");
        assert_eq!(ctx.search_value.get_untracked(), "");
        assert!(!ctx.has_suggestions());

        open_list(&ctx, ActiveInput::Search, "bol", vec![item("BOLT")]);
        ctx.pick(&store, item("BOLT"));
        assert_eq!(store_codes(&store).len(), 1);
        assert_eq!(store_line(&store, "BOLT").unwrap().quantity, "2");
    }

    #[wasm_bindgen_test]
    fn test_pick_from_fetch_fills_code_only() {
        let ctx = AppContext::new(WidgetConfig::default());
        let store = Store::new(OrderState::default());

        open_list(&ctx, ActiveInput::Fetch, "kit", vec![item("KIT-9")]);
        ctx.pick(&store, item("KIT-9"));

        assert_eq!(ctx.fetch_value.get_untracked(), "KIT-9");
        assert!(store_codes(&store).is_empty());
        assert!(!ctx.has_suggestions());
    }

    #[wasm_bindgen_test]
    fn test_keyboard_pick_only_on_active_input() {
        let ctx = AppContext::new(WidgetConfig::default());
        let store = Store::new(OrderState::default());
        open_list(&ctx, ActiveInput::Search, "nu", vec![item("NUT-1"), item("NUT-2")]);

        assert!(!ctx.handle_key(&store, ActiveInput::Fetch, "ArrowDown"));
        assert!(!ctx.handle_key(&store, ActiveInput::Search, "Enter"));

        assert!(ctx.handle_key(&store, ActiveInput::Search, "ArrowDown"));
        assert!(ctx.handle_key(&store, ActiveInput::Search, "ArrowDown"));
        assert_eq!(ctx.selected.get_untracked(), Some(1));
        assert!(ctx.handle_key(&store, ActiveInput::Search, "Enter"));

        assert_eq!(store_codes(&store), vec!["NUT-2".to_string()]);
        assert!(!ctx.has_suggestions());
    }

    #[wasm_bindgen_test]
    fn test_escape_closes_and_drops_in_flight_request() {
        let ctx = AppContext::new(WidgetConfig::default());
        let store = Store::new(OrderState::default());
        open_list(&ctx, ActiveInput::Search, "wa", vec![item("WASHER")]);
        let in_flight = ctx.requests.arm();

        assert!(ctx.handle_key(&store, ActiveInput::Search, "Escape"));
        assert!(!ctx.has_suggestions());
        assert!(!ctx.requests.is_current(in_flight));
    }
}
