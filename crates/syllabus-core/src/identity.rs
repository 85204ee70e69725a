use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Author;

/// Authenticated caller identity.
///
/// Produced by whatever authentication layer fronts the engine. The engine
/// trusts it as-is and never re-verifies credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Principal {
    /// Author ID (`usr-…`) of the caller.
    pub author_id: String,
    /// Email the caller authenticated with.
    pub email: String,
}

impl Principal {
    #[must_use]
    pub fn new(author_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            email: email.into(),
        }
    }
}

impl From<Author> for Principal {
    fn from(author: Author) -> Self {
        Self {
            author_id: author.id,
            email: author.email,
        }
    }
}
