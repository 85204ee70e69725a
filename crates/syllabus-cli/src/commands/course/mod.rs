mod create;
mod list;
mod mine;
mod publish;
mod show;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::context::AppContext;

/// Handle `syl course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::Create { author, file } => create::run(author, file, ctx, flags).await,
        CourseCommands::Update { id, author, file } => {
            update::run(id, author, file, ctx, flags).await
        }
        CourseCommands::Publish { id, author } => publish::run(id, author, ctx, flags).await,
        CourseCommands::Show { id, version } => show::run(id, *version, ctx, flags).await,
        CourseCommands::List {
            search,
            difficulty,
            language,
            tag,
            sort,
            limit,
        } => {
            list::run(
                search.as_deref(),
                difficulty.as_deref(),
                language.as_deref(),
                tag,
                sort.as_deref(),
                *limit,
                ctx,
                flags,
            )
            .await
        }
        CourseCommands::Mine { author } => mine::run(author, ctx, flags).await,
    }
}
