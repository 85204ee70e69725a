use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TagListResponse {
    tags: Vec<String>,
}

/// Handle `syl tags`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tags = ctx.service.list_tags().await?;
    output(&TagListResponse { tags }, flags.format)
}
