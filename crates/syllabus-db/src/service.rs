//! Service layer owning the database handle.
//!
//! `CourseService` wraps `CourseDb` plus the write-path defaults. All engine
//! operations are implemented as `impl CourseService` blocks in `repos`.
//!
//! Every write operation follows this protocol:
//! 1. Validate the payload (no transaction yet)
//! 2. Check out the connection and begin a `UnitOfWork`
//! 3. Check ownership / draft state, then apply all row writes in order
//! 4. Commit, or roll back on any error
//! 5. Build the result projection on the same connection

use syllabus_config::SyllabusConfig;

use crate::CourseDb;
use crate::error::DatabaseError;

pub use syllabus_config::DEFAULT_COVER_URL;

/// Course engine entry point.
pub struct CourseService {
    db: CourseDb,
    default_cover_url: String,
}

impl CourseService {
    /// Create a service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = CourseDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create a service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the configured database cannot be opened.
    pub async fn from_config(config: &SyllabusConfig) -> Result<Self, DatabaseError> {
        let db = CourseDb::open_local(&config.database.path).await?;
        Ok(Self::from_db(db).with_default_cover_url(config.general.default_cover_url.clone()))
    }

    /// Create from an existing `CourseDb`.
    #[must_use]
    pub fn from_db(db: CourseDb) -> Self {
        Self {
            db,
            default_cover_url: DEFAULT_COVER_URL.to_string(),
        }
    }

    /// Override the cover image applied to new courses without one.
    #[must_use]
    pub fn with_default_cover_url(mut self, url: impl Into<String>) -> Self {
        self.default_cover_url = url.into();
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CourseDb {
        &self.db
    }

    #[must_use]
    pub fn default_cover_url(&self) -> &str {
        &self.default_cover_url
    }
}
