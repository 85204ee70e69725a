//! Entity Store: primitive row reads and writes.
//!
//! Every function takes the connection explicitly. Writers pass
//! `UnitOfWork::conn()` so all rows of one operation land in one transaction;
//! readers may pass a plain checked-out connection.

pub mod author;
pub mod course;
pub mod lesson;
pub mod quiz;
pub mod tag;

use crate::error::DatabaseError;

/// Generate a prefixed ID via libSQL. Returns e.g. `"crs-a3f8b2c19e04d7f5"`.
///
/// Uses `randomblob(8)` in SQL to produce 16-char hex (64 random bits), then
/// prepends the prefix.
/// Prefixes come from `syllabus_core::ids` constants only.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or returns no rows.
pub async fn generate_id(conn: &libsql::Connection, prefix: &str) -> Result<String, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT '{prefix}-' || lower(hex(randomblob(8)))"), ())
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<String>(0)?)
}
