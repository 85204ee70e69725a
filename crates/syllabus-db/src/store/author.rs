//! Author rows.

use chrono::{DateTime, Utc};
use syllabus_core::entities::Author;

use crate::error::DatabaseError;
use crate::helpers::{fmt_timestamp, parse_datetime};

fn row_to_author(row: &libsql::Row) -> Result<Author, DatabaseError> {
    Ok(Author {
        id: row.get::<String>(0)?,
        email: row.get::<String>(1)?,
        full_name: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

pub async fn insert(
    conn: &libsql::Connection,
    id: &str,
    email: &str,
    full_name: &str,
    now: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO authors (id, email, full_name, created_at) VALUES (?1, ?2, ?3, ?4)",
        libsql::params![id, email, full_name, fmt_timestamp(now)],
    )
    .await?;
    Ok(())
}

pub async fn get(conn: &libsql::Connection, id: &str) -> Result<Option<Author>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, email, full_name, created_at FROM authors WHERE id = ?1",
            [id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_author(&row)?)),
        None => Ok(None),
    }
}

pub async fn find_by_email(
    conn: &libsql::Connection,
    email: &str,
) -> Result<Option<Author>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, email, full_name, created_at FROM authors WHERE email = ?1",
            [email],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_author(&row)?)),
        None => Ok(None),
    }
}

pub async fn exists(conn: &libsql::Connection, id: &str) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query("SELECT 1 FROM authors WHERE id = ?1", [id])
        .await?;
    Ok(rows.next().await?.is_some())
}
