//! Error types for syllabus-db.
//!
//! `DatabaseError` covers infrastructure failures. `CourseError` is the
//! taxonomy callers of the engine see: typed business-rule rejections plus one
//! opaque persistence variant that keeps the cause as its `source()`.

use syllabus_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors returned by course create/update/publish and the read paths.
#[derive(Debug, Error)]
pub enum CourseError {
    /// The course does not exist, or the caller is not its author.
    /// The two causes are deliberately indistinguishable.
    #[error("Course not found or not authorized")]
    NotFoundOrUnauthorized,

    /// Structural update attempted on a published course.
    #[error("Cannot modify a published course")]
    CannotModifyPublished,

    /// Malformed payload, rejected before any transaction was opened.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store failure. Inside a write transaction this means it was rolled
    /// back; after a commit it means only the read-back failed.
    #[error("Persistence failure")]
    Persistence(#[source] DatabaseError),
}

impl From<DatabaseError> for CourseError {
    fn from(e: DatabaseError) -> Self {
        Self::Persistence(e)
    }
}

impl From<libsql::Error> for CourseError {
    fn from(e: libsql::Error) -> Self {
        Self::Persistence(DatabaseError::LibSql(e))
    }
}

impl From<CoreError> for CourseError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Other(e) => Self::Persistence(DatabaseError::Other(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn persistence_display_hides_cause() {
        let err = CourseError::from(DatabaseError::Query("UNIQUE constraint failed".into()));
        assert_eq!(err.to_string(), "Persistence failure");
        let source = err.source().expect("cause kept as source");
        assert!(source.to_string().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn core_validation_maps_to_validation() {
        let err = CourseError::from(CoreError::Validation("title must not be empty".into()));
        assert!(matches!(err, CourseError::Validation(ref m) if m == "title must not be empty"));
    }
}
