use syllabus_config::SyllabusConfig;
use syllabus_db::service::CourseService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CourseService,
    pub config: SyllabusConfig,
}

impl AppContext {
    /// Open the configured database and build the course service.
    pub async fn init(config: SyllabusConfig) -> anyhow::Result<Self> {
        let service = CourseService::from_config(&config).await?;
        tracing::debug!(database = %config.database.path, "course service ready");
        Ok(Self { service, config })
    }
}
