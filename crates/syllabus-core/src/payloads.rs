//! Write payloads submitted by authors.
//!
//! `CourseCreate` carries a full course tree. `CourseUpdate` is partial: every
//! `None` field is left untouched by the reconciler. Nullable columns use
//! `Option<Option<T>>` so that "absent" (`None`) and "explicit null"
//! (`Some(None)`) stay distinguishable on the wire.
//!
//! Shape validation happens here, before any transaction is opened.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{Difficulty, LessonType, QuestionType};
use crate::errors::CoreError;

/// Deserialize a present field (including `null`) as `Some(..)`.
///
/// Paired with `#[serde(default)]` so an absent field stays `None`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Full course tree for `create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub language: Option<String>,
    /// Falls back to the configured default cover when absent.
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub lessons: Vec<LessonInput>,
}

/// Partial course update for `update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_url: Option<Option<String>>,
    /// Full replacement of the tag set. `Some(vec![])` clears all tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Full lesson list. Entries carrying a known `id` are updated in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<LessonInput>>,
}

/// One submitted lesson.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonInput {
    /// ID of an existing lesson to update in place. Unknown IDs create a new lesson.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub lesson_type: LessonType,
    /// Absent: content untouched (on update). `null`: content removed.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Option<ContentInput>>,
    /// Absent: quiz untouched (on update). Present: quiz fully replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentInput {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizInput {
    #[serde(default)]
    pub questions: Vec<QuestionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionInput {
    pub text: String,
    pub question_type: QuestionType,
    /// Persisted only for `choice` questions.
    #[serde(default)]
    pub options: Vec<OptionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OptionInput {
    pub label: String,
}

impl CourseCreate {
    /// Check required strings and nested entries.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        optional_text("language", self.language.as_deref())?;
        optional_text("cover_url", self.cover_url.as_deref())?;
        validate_tags(&self.tags)?;
        validate_lessons(&self.lessons)
    }
}

impl CourseUpdate {
    /// Check every field that is present.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        if let Some(language) = &self.language {
            optional_text("language", language.as_deref())?;
        }
        if let Some(cover_url) = &self.cover_url {
            optional_text("cover_url", cover_url.as_deref())?;
        }
        if let Some(tags) = &self.tags {
            validate_tags(tags)?;
        }
        if let Some(lessons) = &self.lessons {
            validate_lessons(lessons)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Nullable strings are either absent or non-blank; blank would read back as null.
fn optional_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    value.map_or(Ok(()), |v| require_text(field, v))
}

fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    for (i, tag) in tags.iter().enumerate() {
        require_text(&format!("tags[{i}]"), tag)?;
    }
    Ok(())
}

fn validate_lessons(lessons: &[LessonInput]) -> Result<(), CoreError> {
    for (i, lesson) in lessons.iter().enumerate() {
        require_text(&format!("lessons[{i}].title"), &lesson.title)?;
        if let Some(Some(content)) = &lesson.content {
            require_text(&format!("lessons[{i}].content.body"), &content.body)?;
            optional_text(
                &format!("lessons[{i}].content.video_url"),
                content.video_url.as_deref(),
            )?;
        }
        let Some(quiz) = &lesson.quiz else {
            continue;
        };
        for (q, question) in quiz.questions.iter().enumerate() {
            let path = format!("lessons[{i}].quiz.questions[{q}]");
            require_text(&format!("{path}.text"), &question.text)?;
            for (o, option) in question.options.iter().enumerate() {
                require_text(&format!("{path}.options[{o}].label"), &option.label)?;
            }
        }
    }
    Ok(())
}

/// Builder for `CourseUpdate`, mirroring the optional fields one-to-one.
pub struct CourseUpdateBuilder(CourseUpdate);

impl CourseUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CourseUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    #[must_use]
    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    #[must_use]
    pub const fn difficulty(mut self, val: Difficulty) -> Self {
        self.0.difficulty = Some(val);
        self
    }

    #[must_use]
    pub fn language(mut self, val: Option<String>) -> Self {
        self.0.language = Some(val);
        self
    }

    #[must_use]
    pub fn cover_url(mut self, val: Option<String>) -> Self {
        self.0.cover_url = Some(val);
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn lessons(mut self, lessons: Vec<LessonInput>) -> Self {
        self.0.lessons = Some(lessons);
        self
    }

    #[must_use]
    pub fn build(self) -> CourseUpdate {
        self.0
    }
}

impl Default for CourseUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
