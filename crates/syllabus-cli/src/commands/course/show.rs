use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    version: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match ctx.service.find_course(id, version).await? {
        Some(course) => output(&course, flags.format),
        None => match version {
            Some(version) => bail!("course '{id}' not found at version {version}"),
            None => bail!("course '{id}' not found"),
        },
    }
}
