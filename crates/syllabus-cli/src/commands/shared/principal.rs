use anyhow::anyhow;
use syllabus_core::identity::Principal;
use syllabus_core::ids::{PREFIX_AUTHOR, has_prefix};

use crate::context::AppContext;

/// Resolve `--author` (an author ID or email) to the calling principal.
pub async fn resolve(ctx: &AppContext, author: &str) -> anyhow::Result<Principal> {
    let found = if has_prefix(author, PREFIX_AUTHOR) {
        ctx.service.get_author(author).await?
    } else {
        ctx.service.find_author_by_email(author).await?
    };
    let principal = Principal::from(found.ok_or_else(|| anyhow!("unknown author '{author}'"))?);
    tracing::debug!(author_id = %principal.author_id, "resolved principal");
    Ok(principal)
}
