//! Search Commands

use serde::Serialize;

use super::post_json;
use crate::config::WidgetConfig;
use crate::models::InventoryItem;

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
}

/// Items whose description contains `query`
pub async fn search_items(config: &WidgetConfig, query: &str) -> Result<Vec<InventoryItem>, String> {
    post_json(&config.endpoint("/search"), &SearchArgs { query }).await
}
