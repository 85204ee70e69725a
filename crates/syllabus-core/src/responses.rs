//! Read models returned to callers.
//!
//! `CourseAggregate` is the assembled view of one course: base attributes,
//! author display name, tags, ordered lesson summaries, and stats.
//! `LessonDetail` is the full nested read of one lesson.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CourseStats, Lesson, LessonContent, Question, QuestionOption};
use crate::enums::{Difficulty, LessonType};

/// Fully assembled course as returned by every engine operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseAggregate {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub language: Option<String>,
    pub cover_url: Option<String>,
    /// Sorted by name.
    pub tags: Vec<String>,
    pub estimated_duration: u32,
    pub version: u32,
    pub is_published: bool,
    pub stats: CourseStats,
    /// Ordered by `sort_order`.
    pub lessons: Vec<LessonSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lesson entry inside a `CourseAggregate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub lesson_type: LessonType,
    pub sort_order: u32,
    /// True iff at least one question exists for the lesson.
    pub has_quiz: bool,
}

/// A question together with its ordered options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<QuestionOption>,
}

/// Full nested read of one lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonDetail {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub content: Option<LessonContent>,
    pub questions: Vec<QuestionDetail>,
}

impl LessonDetail {
    #[must_use]
    pub fn has_quiz(&self) -> bool {
        !self.questions.is_empty()
    }
}
