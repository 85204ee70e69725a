use std::path::Path;

use syllabus_core::payloads::CourseCreate;

use crate::cli::GlobalFlags;
use crate::commands::shared::payload::read_payload;
use crate::commands::shared::principal;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    author: &str,
    file: &Path,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let principal = principal::resolve(ctx, author).await?;
    let payload: CourseCreate = read_payload(file)?;
    let course = ctx.service.create_course(&payload, &principal.author_id).await?;
    output(&course, flags.format)
}
