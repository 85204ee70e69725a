//! Projection Builder: assembles read models from rows.
//!
//! Pure reads. Callers choose the connection, so the write path can build the
//! result projection on the same connection right after its commit.

use syllabus_core::entities::CourseStats;
use syllabus_core::responses::{CourseAggregate, LessonDetail, QuestionDetail};

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, get_u32, parse_datetime, parse_enum};
use crate::store::{lesson, quiz, tag};

/// Column list shared by every aggregate query. Joined with the author
/// (display name) and the stats row.
pub(crate) const AGGREGATE_SELECT: &str = "SELECT
        c.id, c.author_id, a.full_name, c.title, c.description, c.difficulty,
        c.language, c.cover_url, c.estimated_duration, c.version, c.is_published,
        COALESCE(cs.enrollments, 0), COALESCE(cs.avg_completion, 0.0),
        COALESCE(cs.avg_score, 0.0), c.created_at, c.updated_at
     FROM courses c
     JOIN authors a ON a.id = c.author_id
     LEFT JOIN course_stats cs ON cs.course_id = c.id";

/// Parse an `AGGREGATE_SELECT` row. Tags and lessons are filled in later.
fn row_to_aggregate(row: &libsql::Row) -> Result<CourseAggregate, DatabaseError> {
    Ok(CourseAggregate {
        id: row.get::<String>(0)?,
        author_id: row.get::<String>(1)?,
        author_name: row.get::<String>(2)?,
        title: row.get::<String>(3)?,
        description: row.get::<String>(4)?,
        difficulty: parse_enum(&row.get::<String>(5)?)?,
        language: get_opt_string(row, 6)?,
        cover_url: get_opt_string(row, 7)?,
        estimated_duration: get_u32(row, 8)?,
        version: get_u32(row, 9)?,
        is_published: get_bool(row, 10)?,
        stats: CourseStats {
            enrollments: get_u32(row, 11)?,
            avg_completion: row.get::<f64>(12)?,
            avg_score: row.get::<f64>(13)?,
        },
        tags: Vec::new(),
        lessons: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(14)?)?,
        updated_at: parse_datetime(&row.get::<String>(15)?)?,
    })
}

/// Fill in tags and lesson summaries.
async fn complete(
    conn: &libsql::Connection,
    mut aggregate: CourseAggregate,
) -> Result<CourseAggregate, DatabaseError> {
    aggregate.tags = tag::for_course(conn, &aggregate.id).await?;
    aggregate.lessons = lesson::summaries(conn, &aggregate.id).await?;
    Ok(aggregate)
}

/// Build the aggregate of one course, or `None` if it does not exist.
///
/// # Errors
///
/// Returns `DatabaseError` if any query fails or a row is malformed.
pub async fn course(
    conn: &libsql::Connection,
    course_id: &str,
) -> Result<Option<CourseAggregate>, DatabaseError> {
    let sql = format!("{AGGREGATE_SELECT} WHERE c.id = ?1");
    let mut rows = conn.query(&sql, [course_id]).await?;
    let Some(row) = rows.next().await? else {
        return Ok(None);
    };
    let base = row_to_aggregate(&row)?;
    drop(rows);
    Ok(Some(complete(conn, base).await?))
}

/// Build aggregates for every row of a query shaped like `AGGREGATE_SELECT`,
/// preserving row order.
///
/// # Errors
///
/// Returns `DatabaseError` if any query fails or a row is malformed.
pub async fn courses(
    conn: &libsql::Connection,
    sql: &str,
    params: Vec<libsql::Value>,
) -> Result<Vec<CourseAggregate>, DatabaseError> {
    let mut rows = conn.query(sql, libsql::params_from_iter(params)).await?;
    let mut bases = Vec::new();
    while let Some(row) = rows.next().await? {
        bases.push(row_to_aggregate(&row)?);
    }
    drop(rows);

    let mut aggregates = Vec::with_capacity(bases.len());
    for base in bases {
        aggregates.push(complete(conn, base).await?);
    }
    Ok(aggregates)
}

/// Full nested read of one lesson: content, then questions with options,
/// each level in `sort_order`.
///
/// # Errors
///
/// Returns `DatabaseError` if any query fails or a row is malformed.
pub async fn lesson_detail(
    conn: &libsql::Connection,
    lesson_id: &str,
) -> Result<Option<LessonDetail>, DatabaseError> {
    let Some(lesson) = lesson::get(conn, lesson_id).await? else {
        return Ok(None);
    };
    let content = lesson::content(conn, lesson_id).await?;

    let mut questions = Vec::new();
    for question in quiz::questions_for_lesson(conn, lesson_id).await? {
        let options = quiz::options_for_question(conn, &question.id).await?;
        questions.push(QuestionDetail { question, options });
    }

    Ok(Some(LessonDetail {
        lesson,
        content,
        questions,
    }))
}
