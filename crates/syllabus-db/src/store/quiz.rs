//! Question and option rows.
//!
//! A lesson's quiz is never diffed per question: it is deleted and recreated
//! as a whole, so there are no update primitives here.

use syllabus_core::entities::{Question, QuestionOption};
use syllabus_core::enums::QuestionType;

use crate::error::DatabaseError;
use crate::helpers::{get_u32, parse_enum};

/// Delete every question of a lesson together with their options.
pub async fn delete_for_lesson(
    conn: &libsql::Connection,
    lesson_id: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "DELETE FROM question_options
         WHERE question_id IN (SELECT id FROM questions WHERE lesson_id = ?1)",
        [lesson_id],
    )
    .await?;
    conn.execute("DELETE FROM questions WHERE lesson_id = ?1", [lesson_id])
        .await?;
    Ok(())
}

pub async fn insert_question(
    conn: &libsql::Connection,
    id: &str,
    lesson_id: &str,
    text: &str,
    question_type: QuestionType,
    sort_order: u32,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO questions (id, lesson_id, text, question_type, sort_order)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![id, lesson_id, text, question_type.as_str(), i64::from(sort_order)],
    )
    .await?;
    Ok(())
}

pub async fn insert_option(
    conn: &libsql::Connection,
    id: &str,
    question_id: &str,
    label: &str,
    sort_order: u32,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO question_options (id, question_id, label, sort_order)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![id, question_id, label, i64::from(sort_order)],
    )
    .await?;
    Ok(())
}

pub async fn questions_for_lesson(
    conn: &libsql::Connection,
    lesson_id: &str,
) -> Result<Vec<Question>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, lesson_id, text, question_type, sort_order
             FROM questions WHERE lesson_id = ?1 ORDER BY sort_order",
            [lesson_id],
        )
        .await?;
    let mut questions = Vec::new();
    while let Some(row) = rows.next().await? {
        questions.push(Question {
            id: row.get::<String>(0)?,
            lesson_id: row.get::<String>(1)?,
            text: row.get::<String>(2)?,
            question_type: parse_enum(&row.get::<String>(3)?)?,
            sort_order: get_u32(&row, 4)?,
        });
    }
    Ok(questions)
}

pub async fn options_for_question(
    conn: &libsql::Connection,
    question_id: &str,
) -> Result<Vec<QuestionOption>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, question_id, label, sort_order
             FROM question_options WHERE question_id = ?1 ORDER BY sort_order",
            [question_id],
        )
        .await?;
    let mut options = Vec::new();
    while let Some(row) = rows.next().await? {
        options.push(QuestionOption {
            id: row.get::<String>(0)?,
            question_id: row.get::<String>(1)?,
            label: row.get::<String>(2)?,
            sort_order: get_u32(&row, 3)?,
        });
    }
    Ok(options)
}
