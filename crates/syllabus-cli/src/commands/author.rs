use anyhow::anyhow;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthorCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl author`.
pub async fn handle(
    action: &AuthorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthorCommands::Add { email, name } => {
            let author = ctx.service.create_author(email, name).await?;
            output(&author, flags.format)
        }
        AuthorCommands::Get { id } => {
            let author = ctx
                .service
                .get_author(id)
                .await?
                .ok_or_else(|| anyhow!("author '{id}' not found"))?;
            output(&author, flags.format)
        }
    }
}
