//! UI Components
//!
//! Leptos components for the order builder page.

mod item_search_input;
mod suggestion_list;
mod editable_cell;
mod order_row;
mod order_table;
mod bom_panel;
mod export_button;
mod status_bar;

pub use item_search_input::ItemSearchInput;
pub use suggestion_list::SuggestionList;
pub use editable_cell::EditableCell;
pub use order_row::OrderRow;
pub use order_table::OrderTable;
pub use bom_panel::BomPanel;
pub use export_button::ExportButton;
pub use status_bar::StatusBar;
