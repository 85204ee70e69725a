//! Cross-cutting error types for Syllabus.
//!
//! Store-level errors (`DatabaseError`) and the engine's public taxonomy
//! (`CourseError`) live in `syllabus-db`. This module only covers what can be
//! detected without touching storage.

use thiserror::Error;

/// Errors that can be raised before any storage is involved.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A submitted payload failed shape validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
