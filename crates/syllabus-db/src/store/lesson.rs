//! Lesson and lesson-content rows.

use syllabus_core::entities::{Lesson, LessonContent};
use syllabus_core::enums::LessonType;
use syllabus_core::responses::LessonSummary;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, get_u32, parse_enum};
use crate::store::quiz;

fn row_to_lesson(row: &libsql::Row) -> Result<Lesson, DatabaseError> {
    Ok(Lesson {
        id: row.get::<String>(0)?,
        course_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        lesson_type: parse_enum(&row.get::<String>(3)?)?,
        sort_order: get_u32(row, 4)?,
    })
}

/// IDs of a course's lessons in `sort_order`.
pub async fn ids_for_course(
    conn: &libsql::Connection,
    course_id: &str,
) -> Result<Vec<String>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id FROM lessons WHERE course_id = ?1 ORDER BY sort_order",
            [course_id],
        )
        .await?;
    let mut ids = Vec::new();
    while let Some(row) = rows.next().await? {
        ids.push(row.get::<String>(0)?);
    }
    Ok(ids)
}

pub async fn count(conn: &libsql::Connection, course_id: &str) -> Result<usize, DatabaseError> {
    let mut rows = conn
        .query("SELECT COUNT(*) FROM lessons WHERE course_id = ?1", [course_id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let n = row.get::<i64>(0)?;
    usize::try_from(n).map_err(|_| DatabaseError::InvalidState(format!("lesson count {n}")))
}

pub async fn insert(
    conn: &libsql::Connection,
    id: &str,
    course_id: &str,
    title: &str,
    lesson_type: LessonType,
    sort_order: u32,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO lessons (id, course_id, title, lesson_type, sort_order)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![id, course_id, title, lesson_type.as_str(), i64::from(sort_order)],
    )
    .await?;
    Ok(())
}

pub async fn update(
    conn: &libsql::Connection,
    id: &str,
    title: &str,
    lesson_type: LessonType,
    sort_order: u32,
) -> Result<(), DatabaseError> {
    conn.execute(
        "UPDATE lessons SET title = ?1, lesson_type = ?2, sort_order = ?3 WHERE id = ?4",
        libsql::params![title, lesson_type.as_str(), i64::from(sort_order), id],
    )
    .await?;
    Ok(())
}

/// Delete a lesson with its content, questions, and options.
pub async fn delete_tree(conn: &libsql::Connection, id: &str) -> Result<(), DatabaseError> {
    quiz::delete_for_lesson(conn, id).await?;
    delete_content(conn, id).await?;
    conn.execute("DELETE FROM lessons WHERE id = ?1", [id])
        .await?;
    Ok(())
}

pub async fn upsert_content(
    conn: &libsql::Connection,
    lesson_id: &str,
    body: &str,
    video_url: Option<&str>,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO lesson_contents (lesson_id, body, video_url) VALUES (?1, ?2, ?3)
         ON CONFLICT(lesson_id) DO UPDATE SET body = excluded.body, video_url = excluded.video_url",
        libsql::params![lesson_id, body, video_url],
    )
    .await?;
    Ok(())
}

pub async fn delete_content(conn: &libsql::Connection, lesson_id: &str) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM lesson_contents WHERE lesson_id = ?1", [lesson_id])
        .await?;
    Ok(())
}

pub async fn get(conn: &libsql::Connection, id: &str) -> Result<Option<Lesson>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, course_id, title, lesson_type, sort_order FROM lessons WHERE id = ?1",
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_lesson(&row)?)),
        None => Ok(None),
    }
}

pub async fn content(
    conn: &libsql::Connection,
    lesson_id: &str,
) -> Result<Option<LessonContent>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT lesson_id, body, video_url FROM lesson_contents WHERE lesson_id = ?1",
            [lesson_id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(LessonContent {
            lesson_id: row.get::<String>(0)?,
            body: row.get::<String>(1)?,
            video_url: get_opt_string(&row, 2)?,
        })),
        None => Ok(None),
    }
}

/// Ordered lesson summaries of a course, with the derived quiz flag.
pub async fn summaries(
    conn: &libsql::Connection,
    course_id: &str,
) -> Result<Vec<LessonSummary>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT l.id, l.title, l.lesson_type, l.sort_order,
                    EXISTS (SELECT 1 FROM questions q WHERE q.lesson_id = l.id)
             FROM lessons l
             WHERE l.course_id = ?1
             ORDER BY l.sort_order",
            [course_id],
        )
        .await?;
    let mut lessons = Vec::new();
    while let Some(row) = rows.next().await? {
        lessons.push(LessonSummary {
            id: row.get::<String>(0)?,
            title: row.get::<String>(1)?,
            lesson_type: parse_enum(&row.get::<String>(2)?)?,
            sort_order: get_u32(&row, 3)?,
            has_quiz: get_bool(&row, 4)?,
        });
    }
    Ok(lessons)
}
