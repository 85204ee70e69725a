//! Course and course-stats rows.

use chrono::{DateTime, Utc};
use syllabus_core::entities::Course;
use syllabus_core::enums::Difficulty;
use syllabus_core::payloads::CourseUpdate;

use crate::error::DatabaseError;
use crate::helpers::{fmt_timestamp, get_bool, get_opt_string, get_u32, parse_datetime, parse_enum};

/// Fixed per-lesson time estimate, in hours.
pub const HOURS_PER_LESSON: u32 = 2;

/// `estimated_duration` for a course with `lesson_count` lessons.
///
/// `ceil(lesson_count * HOURS_PER_LESSON)`; with a whole-hour estimate the
/// ceiling is exact. Saturates instead of overflowing.
#[must_use]
pub fn estimated_duration_hours(lesson_count: usize) -> u32 {
    u32::try_from(lesson_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(HOURS_PER_LESSON)
}

/// Column values for a freshly created draft.
#[derive(Debug)]
pub struct NewCourse<'a> {
    pub id: &'a str,
    pub author_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub language: Option<&'a str>,
    pub cover_url: Option<&'a str>,
    pub estimated_duration: u32,
    pub now: DateTime<Utc>,
}

const COURSE_COLUMNS: &str = "id, author_id, title, description, difficulty, language, cover_url,
     estimated_duration, version, is_published, created_at, updated_at";

fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get::<String>(0)?,
        author_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        description: row.get::<String>(3)?,
        difficulty: parse_enum(&row.get::<String>(4)?)?,
        language: get_opt_string(row, 5)?,
        cover_url: get_opt_string(row, 6)?,
        estimated_duration: get_u32(row, 7)?,
        version: get_u32(row, 8)?,
        is_published: get_bool(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

/// Insert a draft at version 1.
pub async fn insert(conn: &libsql::Connection, course: &NewCourse<'_>) -> Result<(), DatabaseError> {
    let now = fmt_timestamp(course.now);
    conn.execute(
        "INSERT INTO courses (id, author_id, title, description, difficulty, language, cover_url,
                              estimated_duration, version, is_published, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, 0, ?9, ?10)",
        libsql::params![
            course.id,
            course.author_id,
            course.title,
            course.description,
            course.difficulty.as_str(),
            course.language,
            course.cover_url,
            i64::from(course.estimated_duration),
            now.as_str(),
            now.as_str()
        ],
    )
    .await?;
    Ok(())
}

/// Insert the zeroed stats row for a new course.
pub async fn insert_stats(conn: &libsql::Connection, course_id: &str) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO course_stats (course_id, enrollments, avg_completion, avg_score)
         VALUES (?1, 0, 0.0, 0.0)",
        [course_id],
    )
    .await?;
    Ok(())
}

pub async fn get(conn: &libsql::Connection, id: &str) -> Result<Option<Course>, DatabaseError> {
    let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1");
    let mut rows = conn.query(&sql, [id]).await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_course(&row)?)),
        None => Ok(None),
    }
}

/// `is_published` of a course owned by `author_id`, or `None` if the course
/// does not exist or belongs to someone else.
pub async fn published_flag_for_author(
    conn: &libsql::Connection,
    course_id: &str,
    author_id: &str,
) -> Result<Option<bool>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT is_published FROM courses WHERE id = ?1 AND author_id = ?2",
            [course_id, author_id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(get_bool(&row, 0)?)),
        None => Ok(None),
    }
}

/// Apply the scalar attributes present in `update` and bump `updated_at`.
///
/// Absent fields are left untouched.
pub async fn update_attributes(
    conn: &libsql::Connection,
    course_id: &str,
    update: &CourseUpdate,
    now: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();

    if let Some(ref title) = update.title {
        params.push(title.as_str().into());
        sets.push(format!("title = ?{}", params.len()));
    }
    if let Some(ref description) = update.description {
        params.push(description.as_str().into());
        sets.push(format!("description = ?{}", params.len()));
    }
    if let Some(difficulty) = update.difficulty {
        params.push(difficulty.as_str().into());
        sets.push(format!("difficulty = ?{}", params.len()));
    }
    if let Some(ref language) = update.language {
        params.push(language.as_deref().into());
        sets.push(format!("language = ?{}", params.len()));
    }
    if let Some(ref cover_url) = update.cover_url {
        params.push(cover_url.as_deref().into());
        sets.push(format!("cover_url = ?{}", params.len()));
    }

    params.push(fmt_timestamp(now).into());
    sets.push(format!("updated_at = ?{}", params.len()));

    params.push(course_id.into());
    let sql = format!(
        "UPDATE courses SET {} WHERE id = ?{}",
        sets.join(", "),
        params.len()
    );
    conn.execute(&sql, libsql::params_from_iter(params)).await?;
    Ok(())
}

pub async fn set_estimated_duration(
    conn: &libsql::Connection,
    course_id: &str,
    hours: u32,
) -> Result<(), DatabaseError> {
    conn.execute(
        "UPDATE courses SET estimated_duration = ?1 WHERE id = ?2",
        libsql::params![i64::from(hours), course_id],
    )
    .await?;
    Ok(())
}

/// Flip to published and increment the version in one statement.
///
/// Returns the number of rows changed: 0 when the course does not exist or
/// is not owned by `author_id`.
pub async fn publish(
    conn: &libsql::Connection,
    course_id: &str,
    author_id: &str,
    now: DateTime<Utc>,
) -> Result<u64, DatabaseError> {
    let changed = conn
        .execute(
            "UPDATE courses SET is_published = 1, version = version + 1, updated_at = ?3
             WHERE id = ?1 AND author_id = ?2",
            libsql::params![course_id, author_id, fmt_timestamp(now)],
        )
        .await?;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 2)]
    #[case(3, 6)]
    #[case(5, 10)]
    fn duration_is_two_hours_per_lesson(#[case] lessons: usize, #[case] hours: u32) {
        assert_eq!(estimated_duration_hours(lessons), hours);
    }

    #[test]
    fn duration_saturates() {
        assert_eq!(estimated_duration_hours(usize::MAX), u32::MAX);
    }
}
