//! Export Commands

use serde::Serialize;

use super::post_json;
use crate::config::WidgetConfig;
use crate::models::ServerReply;
use crate::order::ExportRow;

#[derive(Serialize)]
struct ExportArgs<'a> {
    items: &'a [ExportRow],
}

/// Send the table rows to the spreadsheet export; Ok carries the server message
pub async fn export_items(config: &WidgetConfig, rows: &[ExportRow]) -> Result<String, String> {
    let reply: ServerReply = post_json(&config.endpoint("/export"), &ExportArgs { items: rows }).await?;
    reply.into_result()
}
