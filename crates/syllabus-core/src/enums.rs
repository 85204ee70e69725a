//! Enums for course attributes, lesson and question kinds, and listing order.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! and the same string is what gets stored in SQL (see `as_str`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Target audience level of a course.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Middle,
    Senior,
}

impl Difficulty {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Middle => "middle",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LessonType
// ---------------------------------------------------------------------------

/// Kind of lesson.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LessonType {
    #[default]
    Theory,
    Coding,
}

impl LessonType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Coding => "coding",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// Kind of quiz question.
///
/// Only `Choice` questions carry answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Choice,
    ShortText,
    LongText,
}

impl QuestionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Choice => "choice",
            Self::ShortText => "short_text",
            Self::LongText => "long_text",
        }
    }

    /// Whether questions of this type persist their answer options.
    #[must_use]
    pub const fn has_options(self) -> bool {
        matches!(self, Self::Choice)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CourseSort
// ---------------------------------------------------------------------------

/// Ordering applied to catalog listings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CourseSort {
    #[default]
    Newest,
    Oldest,
    Title,
    Popular,
    TopRated,
}

impl CourseSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
        }
    }

    /// SQL `ORDER BY` body for this ordering. Ties fall back to the course ID
    /// so listings are deterministic.
    #[must_use]
    pub const fn order_by(self) -> &'static str {
        match self {
            Self::Newest => "c.created_at DESC, c.id",
            Self::Oldest => "c.created_at ASC, c.id",
            Self::Title => "c.title COLLATE NOCASE ASC, c.id",
            Self::Popular => "cs.enrollments DESC, c.created_at DESC, c.id",
            Self::TopRated => "cs.avg_score DESC, c.created_at DESC, c.id",
        }
    }
}

impl fmt::Display for CourseSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
