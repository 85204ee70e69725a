/// Compute effective limit with precedence: command arg -> configured default.
///
/// A zero limit is treated as unset.
#[must_use]
pub fn effective_limit(local: Option<u32>, fallback: u32) -> u32 {
    local.filter(|limit| *limit > 0).unwrap_or(fallback)
}
