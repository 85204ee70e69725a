//! Course Tree Reconciler: draft creation and structural updates.
//!
//! `create_course` writes a full tree. `update_course` applies a partial
//! update to a draft: scalar attributes, full tag replacement, and, when a
//! lesson list is submitted, the edit plan from `diff::plan_lessons`. Both run
//! inside one `UnitOfWork` and return the post-commit projection.

use syllabus_core::ids::{PREFIX_COURSE, PREFIX_LESSON, PREFIX_OPTION, PREFIX_QUESTION};
use syllabus_core::payloads::{CourseCreate, CourseUpdate, LessonInput, QuizInput};
use syllabus_core::responses::CourseAggregate;

use crate::diff::{LessonPlan, plan_lessons};
use crate::error::{CourseError, DatabaseError};
use crate::helpers::{now, sort_order};
use crate::projection;
use crate::service::CourseService;
use crate::store::{self, course, lesson, tag};
use crate::unit_of_work::UnitOfWork;

impl CourseService {
    /// Create a draft course with its full lesson tree.
    ///
    /// The draft starts at version 1, unpublished, with
    /// `estimated_duration = lessons * HOURS_PER_LESSON`. Lesson IDs in the
    /// payload are ignored.
    ///
    /// # Errors
    ///
    /// - `CourseError::Validation` if the payload is malformed.
    /// - `CourseError::NotFoundOrUnauthorized` if `author_id` is not a registered author.
    /// - `CourseError::Persistence` if any write fails; nothing is persisted.
    ///   Also returned when the write committed but reading it back failed.
    pub async fn create_course(
        &self,
        payload: &CourseCreate,
        author_id: &str,
    ) -> Result<CourseAggregate, CourseError> {
        payload.validate()?;

        let conn = self.db().checkout().await?;
        let uow = UnitOfWork::begin(&conn).await?;
        let result = self.write_new_course(uow.conn(), payload, author_id).await;
        let course_id = uow.finish(result).await?;

        tracing::info!(
            course_id = %course_id,
            author_id,
            lessons = payload.lessons.len(),
            "course created"
        );
        projected(&conn, &course_id).await
    }

    /// Apply a partial update to a draft owned by `author_id`.
    ///
    /// Absent fields are untouched. A submitted `lessons` list is the full
    /// new list: matched lessons are updated in place, unmatched ones are
    /// created, and persisted lessons left out are deleted with their
    /// subtrees. `estimated_duration` is recomputed from the final lesson
    /// count. The version is not bumped.
    ///
    /// # Errors
    ///
    /// - `CourseError::Validation` if the payload is malformed.
    /// - `CourseError::NotFoundOrUnauthorized` if the course does not exist or
    ///   belongs to someone else.
    /// - `CourseError::CannotModifyPublished` if the course is published.
    /// - `CourseError::Persistence` if any write fails; nothing is persisted.
    ///   Also returned when the write committed but reading it back failed.
    pub async fn update_course(
        &self,
        course_id: &str,
        update: &CourseUpdate,
        author_id: &str,
    ) -> Result<CourseAggregate, CourseError> {
        update.validate()?;

        let conn = self.db().checkout().await?;
        let uow = UnitOfWork::begin(&conn).await?;
        let result = apply_update(uow.conn(), course_id, update, author_id).await;
        uow.finish(result).await?;

        tracing::info!(course_id, author_id, "course updated");
        projected(&conn, course_id).await
    }

    async fn write_new_course(
        &self,
        conn: &libsql::Connection,
        payload: &CourseCreate,
        author_id: &str,
    ) -> Result<String, CourseError> {
        if !store::author::exists(conn, author_id).await? {
            return Err(CourseError::NotFoundOrUnauthorized);
        }

        let id = store::generate_id(conn, PREFIX_COURSE).await?;
        let cover_url = payload
            .cover_url
            .as_deref()
            .unwrap_or_else(|| self.default_cover_url());

        course::insert(
            conn,
            &course::NewCourse {
                id: &id,
                author_id,
                title: &payload.title,
                description: &payload.description,
                difficulty: payload.difficulty,
                language: payload.language.as_deref(),
                cover_url: Some(cover_url),
                estimated_duration: course::estimated_duration_hours(payload.lessons.len()),
                now: now(),
            },
        )
        .await?;
        course::insert_stats(conn, &id).await?;
        tag::replace(conn, &id, &payload.tags).await?;

        for (index, input) in payload.lessons.iter().enumerate() {
            insert_lesson_tree(conn, &id, sort_order(index), input).await?;
        }
        Ok(id)
    }
}

/// Read back the aggregate after a committed write.
///
/// A failure here does not undo the write.
pub(super) async fn projected(
    conn: &libsql::Connection,
    course_id: &str,
) -> Result<CourseAggregate, CourseError> {
    let err = match projection::course(conn, course_id).await {
        Ok(Some(aggregate)) => return Ok(aggregate),
        Ok(None) => DatabaseError::NoResult,
        Err(e) => e,
    };
    tracing::warn!(course_id, error = %err, "write committed but read-back failed");
    Err(CourseError::Persistence(err))
}

async fn apply_update(
    conn: &libsql::Connection,
    course_id: &str,
    update: &CourseUpdate,
    author_id: &str,
) -> Result<(), CourseError> {
    match course::published_flag_for_author(conn, course_id, author_id).await? {
        None => return Err(CourseError::NotFoundOrUnauthorized),
        Some(true) => return Err(CourseError::CannotModifyPublished),
        Some(false) => {}
    }

    course::update_attributes(conn, course_id, update, now()).await?;

    if let Some(tags) = &update.tags {
        tag::replace(conn, course_id, tags).await?;
    }

    let count = if let Some(lessons) = &update.lessons {
        let existing = lesson::ids_for_course(conn, course_id).await?;
        let plan = plan_lessons(&existing, lessons);
        tracing::debug!(
            course_id,
            deletes = plan.deletes.len(),
            updates = plan.updates.len(),
            creates = plan.creates.len(),
            "applying lesson plan"
        );
        if !plan.is_noop() {
            apply_lesson_plan(conn, course_id, &plan).await?;
        }
        plan.final_count()
    } else {
        lesson::count(conn, course_id).await?
    };

    course::set_estimated_duration(conn, course_id, course::estimated_duration_hours(count))
        .await?;
    Ok(())
}

/// Deletes first, then in-place updates, then creates.
async fn apply_lesson_plan(
    conn: &libsql::Connection,
    course_id: &str,
    plan: &LessonPlan<'_>,
) -> Result<(), DatabaseError> {
    for id in &plan.deletes {
        lesson::delete_tree(conn, id).await?;
    }

    for planned in &plan.updates {
        let input = planned.input;
        lesson::update(conn, planned.id, &input.title, input.lesson_type, planned.sort_order)
            .await?;

        match &input.content {
            None => {}
            Some(None) => lesson::delete_content(conn, planned.id).await?,
            Some(Some(content)) => {
                lesson::upsert_content(conn, planned.id, &content.body, content.video_url.as_deref())
                    .await?;
            }
        }

        if let Some(quiz) = &input.quiz {
            store::quiz::delete_for_lesson(conn, planned.id).await?;
            insert_quiz(conn, planned.id, quiz).await?;
        }
    }

    for planned in &plan.creates {
        insert_lesson_tree(conn, course_id, planned.sort_order, planned.input).await?;
    }
    Ok(())
}

/// Insert one lesson with its content and quiz. Returns the new lesson ID.
async fn insert_lesson_tree(
    conn: &libsql::Connection,
    course_id: &str,
    sort_order: u32,
    input: &LessonInput,
) -> Result<String, DatabaseError> {
    let id = store::generate_id(conn, PREFIX_LESSON).await?;
    lesson::insert(conn, &id, course_id, &input.title, input.lesson_type, sort_order).await?;

    if let Some(Some(content)) = &input.content {
        lesson::upsert_content(conn, &id, &content.body, content.video_url.as_deref()).await?;
    }
    if let Some(quiz) = &input.quiz {
        insert_quiz(conn, &id, quiz).await?;
    }
    Ok(id)
}

/// Insert questions in submission order. Options are kept for `choice`
/// questions only.
async fn insert_quiz(
    conn: &libsql::Connection,
    lesson_id: &str,
    quiz: &QuizInput,
) -> Result<(), DatabaseError> {
    for (q, question) in quiz.questions.iter().enumerate() {
        let question_id = store::generate_id(conn, PREFIX_QUESTION).await?;
        store::quiz::insert_question(
            conn,
            &question_id,
            lesson_id,
            &question.text,
            question.question_type,
            sort_order(q),
        )
        .await?;

        if !question.question_type.has_options() {
            if !question.options.is_empty() {
                tracing::debug!(
                    question_id = %question_id,
                    question_type = %question.question_type,
                    "ignoring options on non-choice question"
                );
            }
            continue;
        }

        for (o, option) in question.options.iter().enumerate() {
            let option_id = store::generate_id(conn, PREFIX_OPTION).await?;
            store::quiz::insert_option(conn, &option_id, &question_id, &option.label, sort_order(o))
                .await?;
        }
    }
    Ok(())
}
