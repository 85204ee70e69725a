//! General application configuration.

use serde::{Deserialize, Serialize};

/// Cover image applied to courses created without one.
pub const DEFAULT_COVER_URL: &str = "/images/courses/default.png";

fn default_cover_url() -> String {
    DEFAULT_COVER_URL.to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Cover URL stored on new courses whose payload has none.
    #[serde(default = "default_cover_url")]
    pub default_cover_url: String,

    /// Default result limit for catalog listings.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_cover_url: default_cover_url(),
            default_limit: default_limit(),
        }
    }
}
