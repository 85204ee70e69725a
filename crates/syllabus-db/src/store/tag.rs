//! Course tag rows. The tag set has no identity of its own: it is always
//! replaced as a whole.

use crate::error::DatabaseError;

/// Replace the full tag set of a course. An empty slice clears all tags.
///
/// Duplicate entries collapse into one row.
pub async fn replace(
    conn: &libsql::Connection,
    course_id: &str,
    tags: &[String],
) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM course_tags WHERE course_id = ?1", [course_id])
        .await?;
    for tag in tags {
        conn.execute(
            "INSERT OR IGNORE INTO course_tags (course_id, tag) VALUES (?1, ?2)",
            [course_id, tag.as_str()],
        )
        .await?;
    }
    Ok(())
}

/// Tags of one course, sorted by name.
pub async fn for_course(
    conn: &libsql::Connection,
    course_id: &str,
) -> Result<Vec<String>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT tag FROM course_tags WHERE course_id = ?1 ORDER BY tag",
            [course_id],
        )
        .await?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next().await? {
        tags.push(row.get::<String>(0)?);
    }
    Ok(tags)
}

/// Distinct tags carried by at least one published course, sorted.
pub async fn published_distinct(conn: &libsql::Connection) -> Result<Vec<String>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT DISTINCT ct.tag FROM course_tags ct
             JOIN courses c ON c.id = ct.course_id
             WHERE c.is_published = 1
             ORDER BY ct.tag",
            (),
        )
        .await?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next().await? {
        tags.push(row.get::<String>(0)?);
    }
    Ok(tags)
}
