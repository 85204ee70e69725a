use std::path::Path;

use syllabus_core::payloads::CourseUpdate;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::read_payload;
use crate::commands::shared::principal;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    author: &str,
    file: &Path,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let principal = principal::resolve(ctx, author).await?;
    let payload: CourseUpdate = read_payload(file)?;
    let course = ctx.service.update_course(id, &payload, &principal.author_id).await?;
    output(&course, flags.format)
}
