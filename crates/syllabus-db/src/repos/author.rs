//! Author registry: the principals allowed to own courses.

use syllabus_core::entities::Author;
use syllabus_core::ids::PREFIX_AUTHOR;

use crate::error::CourseError;
use crate::helpers::now;
use crate::service::CourseService;
use crate::store;

impl CourseService {
    /// Register a new author.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::Validation` for a blank email or name, and
    /// `CourseError::Persistence` if the insert fails (e.g. duplicate email).
    pub async fn create_author(&self, email: &str, full_name: &str) -> Result<Author, CourseError> {
        if email.trim().is_empty() {
            return Err(CourseError::Validation("email must not be empty".into()));
        }
        if full_name.trim().is_empty() {
            return Err(CourseError::Validation("full_name must not be empty".into()));
        }

        let conn = self.db().checkout().await?;
        let id = store::generate_id(&conn, PREFIX_AUTHOR).await?;
        let now = now();
        store::author::insert(&conn, &id, email, full_name, now).await?;
        tracing::info!(author_id = %id, "author registered");

        Ok(Author {
            id,
            email: email.to_string(),
            full_name: full_name.to_string(),
            created_at: now,
        })
    }

    pub async fn get_author(&self, id: &str) -> Result<Option<Author>, CourseError> {
        let conn = self.db().checkout().await?;
        Ok(store::author::get(&conn, id).await?)
    }

    pub async fn find_author_by_email(&self, email: &str) -> Result<Option<Author>, CourseError> {
        let conn = self.db().checkout().await?;
        Ok(store::author::find_by_email(&conn, email).await?)
    }
}
