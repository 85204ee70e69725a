use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// Course row.
///
/// While `is_published` is false every field except `id`, `author_id`, and
/// `version` may be rewritten by the author. Once published, only a further
/// publish may touch it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub language: Option<String>,
    pub cover_url: Option<String>,
    /// Derived from the lesson count, in hours.
    pub estimated_duration: u32,
    pub version: u32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Learner statistics for a course. Read-only to the reconciliation engine,
/// which only zero-initializes them on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseStats {
    pub enrollments: u32,
    pub avg_completion: f64,
    pub avg_score: f64,
}
