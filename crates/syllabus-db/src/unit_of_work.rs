//! Scoped transaction for one engine operation.
//!
//! A `UnitOfWork` is opened on a checked-out connection, handed by reference
//! to every store call of the operation, and consumed by `finish`, which
//! commits on `Ok` and rolls back on `Err`. It never outlives the operation.

use std::ops::Deref;

use crate::error::DatabaseError;

/// One libSQL transaction, committed or rolled back exactly once.
pub struct UnitOfWork {
    tx: libsql::Transaction,
}

impl UnitOfWork {
    /// Open an immediate transaction on `conn`.
    ///
    /// The write lock is taken up front, so a concurrent writer waits at
    /// `BEGIN` (up to the connection's busy timeout) instead of failing on
    /// its first write after reading.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `BEGIN` fails.
    pub async fn begin(conn: &libsql::Connection) -> Result<Self, DatabaseError> {
        Ok(Self {
            tx: conn
                .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
                .await?,
        })
    }

    /// Connection view of the open transaction, for store calls.
    #[must_use]
    pub fn conn(&self) -> &libsql::Connection {
        &self.tx
    }

    /// Commit if `result` is `Ok`, roll back otherwise, and pass `result` through.
    ///
    /// A failed commit is rolled back and surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns the original error, or the commit failure converted into `E`.
    pub async fn finish<T, E>(self, result: Result<T, E>) -> Result<T, E>
    where
        E: From<DatabaseError> + std::fmt::Display,
    {
        match result {
            Ok(value) => {
                let conn = self.tx.deref().clone();
                if let Err(e) = self.tx.commit().await {
                    tracing::warn!(error = %e, "commit failed, rolling back");
                    if !conn.is_autocommit() {
                        if let Err(rb) = conn.execute("ROLLBACK", ()).await {
                            tracing::warn!(error = %rb, "rollback after failed commit failed");
                        }
                    }
                    return Err(E::from(DatabaseError::from(e)));
                }
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(error = %err, "rolling back unit of work");
                if let Err(rb) = self.tx.rollback().await {
                    tracing::warn!(error = %rb, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CourseDb;

    async fn count_authors(conn: &libsql::Connection) -> i64 {
        let mut rows = conn.query("SELECT COUNT(*) FROM authors", ()).await.unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }

    async fn insert_author(conn: &libsql::Connection, id: &str) -> Result<(), DatabaseError> {
        conn.execute(
            "INSERT INTO authors (id, email, full_name, created_at) VALUES (?1, ?1, 'x', 'now')",
            [id],
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn finish_ok_commits() {
        let db = CourseDb::open_local(":memory:").await.unwrap();
        let conn = db.checkout().await.unwrap();

        let uow = UnitOfWork::begin(&conn).await.unwrap();
        let result = insert_author(uow.conn(), "usr-00000001").await;
        uow.finish(result).await.unwrap();

        assert_eq!(count_authors(&conn).await, 1);
        assert!(conn.is_autocommit());
    }

    #[tokio::test]
    async fn finish_err_rolls_back_all_writes() {
        let db = CourseDb::open_local(":memory:").await.unwrap();
        let conn = db.checkout().await.unwrap();

        let uow = UnitOfWork::begin(&conn).await.unwrap();
        insert_author(uow.conn(), "usr-00000001").await.unwrap();
        let result: Result<(), DatabaseError> =
            Err(DatabaseError::InvalidState("business rule".into()));
        let err = uow.finish(result).await.unwrap_err();

        assert!(matches!(err, DatabaseError::InvalidState(_)));
        assert_eq!(count_authors(&conn).await, 0);
        assert!(conn.is_autocommit());
    }
}
