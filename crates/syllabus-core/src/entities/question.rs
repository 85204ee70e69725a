use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuestionType;

/// Quiz question belonging to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub lesson_id: String,
    pub text: String,
    pub question_type: QuestionType,
    pub sort_order: u32,
}

/// Answer option of a `choice` question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: String,
    pub question_id: String,
    pub label: String,
    pub sort_order: u32,
}
