use anyhow::Context;
use syllabus_config::SyllabusConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SyllabusConfig> {
    let mut config = SyllabusConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut SyllabusConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
}

#[cfg(test)]
mod tests {
    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};
    use syllabus_config::SyllabusConfig;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            db: db.map(str::to_string),
        }
    }

    #[test]
    fn db_flag_overrides_configured_path() {
        let mut config = SyllabusConfig::default();
        apply_overrides(&mut config, &flags(Some(":memory:")));
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn no_flag_keeps_configured_path() {
        let mut config = SyllabusConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, "syllabus.db");
    }
}
