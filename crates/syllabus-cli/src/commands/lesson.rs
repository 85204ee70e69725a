use anyhow::anyhow;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl lesson`.
pub async fn handle(
    action: &LessonCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LessonCommands::Show { id } => {
            let detail = ctx
                .service
                .find_lesson(id)
                .await?
                .ok_or_else(|| anyhow!("lesson '{id}' not found"))?;
            output(&detail, flags.format)
        }
    }
}
