use crate::cli::GlobalFlags;
use crate::commands::shared::principal;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, author: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let principal = principal::resolve(ctx, author).await?;
    let course = ctx.service.publish_course(id, &principal.author_id).await?;
    output(&course, flags.format)
}
