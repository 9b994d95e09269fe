//! Bill of Materials Commands

use serde::Serialize;

use super::post_json;
use crate::bom::AssociationDraft;
use crate::config::WidgetConfig;
use crate::models::{BomReply, ServerReply};

#[derive(Serialize)]
struct FetchArgs<'a> {
    code: &'a str,
}

#[derive(Serialize)]
struct AssociateArgs {
    items: Vec<String>,
}

/// Parent item and its children for `code`
pub async fn fetch_bom(config: &WidgetConfig, code: &str) -> Result<BomReply, String> {
    post_json(&config.endpoint("/fetch"), &FetchArgs { code }).await
}

/// Record `draft` as a parent/children association; Ok carries the server message
pub async fn associate_items(config: &WidgetConfig, draft: &AssociationDraft) -> Result<String, String> {
    let args = AssociateArgs { items: draft.to_items() };
    let reply: ServerReply = post_json(&config.endpoint("/associate"), &args).await?;
    reply.into_result()
}
