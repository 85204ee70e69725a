//! ID prefixes for every persisted entity.
//!
//! IDs are generated by the store as `{prefix}-{16 hex chars}`, e.g. `crs-a3f8b2c19e04d7f5`.

pub const PREFIX_AUTHOR: &str = "usr";
pub const PREFIX_COURSE: &str = "crs";
pub const PREFIX_LESSON: &str = "les";
pub const PREFIX_QUESTION: &str = "qst";
pub const PREFIX_OPTION: &str = "opt";

/// Every prefix in use. Kept in sync with the constants above.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_AUTHOR,
    PREFIX_COURSE,
    PREFIX_LESSON,
    PREFIX_QUESTION,
    PREFIX_OPTION,
];

/// Check whether an ID carries the given prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
