use serde::Serialize;
use syllabus_core::responses::CourseAggregate;

use crate::cli::GlobalFlags;
use crate::commands::shared::principal;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CourseListResponse {
    courses: Vec<CourseAggregate>,
}

pub async fn run(author: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let principal = principal::resolve(ctx, author).await?;
    let courses = ctx.service.find_courses_by_author(&principal.author_id).await?;
    output(&CourseListResponse { courses }, flags.format)
}
