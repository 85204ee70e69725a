use serde::Serialize;
use syllabus_core::enums::{CourseSort, Difficulty};
use syllabus_core::responses::CourseAggregate;
use syllabus_db::repos::catalog::CourseFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CourseListResponse {
    courses: Vec<CourseAggregate>,
}

#[allow(clippy::too_many_arguments)]
pub async fn run(
    search: Option<&str>,
    difficulty: Option<&str>,
    language: Option<&str>,
    tags: &[String],
    sort: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = build_filter(
        search,
        difficulty,
        language,
        tags,
        sort,
        effective_limit(limit, ctx.config.general.default_limit),
    )?;
    let courses = ctx.service.find_courses(&filter).await?;
    output(&CourseListResponse { courses }, flags.format)
}

fn build_filter(
    search: Option<&str>,
    difficulty: Option<&str>,
    language: Option<&str>,
    tags: &[String],
    sort: Option<&str>,
    limit: u32,
) -> anyhow::Result<CourseFilter> {
    Ok(CourseFilter {
        search: search.map(str::to_string),
        difficulty: difficulty
            .map(|value| parse_enum::<Difficulty>(value, "difficulty"))
            .transpose()?,
        language: language.map(str::to_string),
        tags: tags.to_vec(),
        sort: sort
            .map(|value| parse_enum::<CourseSort>(value, "sort"))
            .transpose()?
            .unwrap_or_default(),
        limit: Some(limit),
    })
}
