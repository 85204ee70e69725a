use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LessonType;

/// Lesson row. `sort_order` is its 0-based position in the course.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub lesson_type: LessonType,
    pub sort_order: u32,
}

/// Theory content attached to at most one lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonContent {
    pub lesson_id: String,
    pub body: String,
    pub video_url: Option<String>,
}
