use std::path::Path;

use anyhow::Context;
use serde_json::json;
use syllabus_config::{PROJECT_CONFIG_PATH, SyllabusConfig};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl init`.
///
/// Writes `.syllabus/config.toml` with the effective settings unless one
/// already exists, then opens the database, which applies the schema.
pub async fn handle(config: SyllabusConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config_path = Path::new(PROJECT_CONFIG_PATH);
    let config_created = if config_path.exists() {
        false
    } else {
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        std::fs::write(config_path, render_project_config(&config))
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        true
    };

    let ctx = AppContext::init(config).await?;
    tracing::info!(database = %ctx.config.database.path, config_created, "project initialized");

    output(
        &json!({
            "database": ctx.config.database.path,
            "config": PROJECT_CONFIG_PATH,
            "config_created": config_created,
        }),
        flags.format,
    )
}

fn render_project_config(config: &SyllabusConfig) -> String {
    format!(
        "[database]\npath = {:?}\n\n[general]\ndefault_cover_url = {:?}\ndefault_limit = {}\n",
        config.database.path, config.general.default_cover_url, config.general.default_limit
    )
}
