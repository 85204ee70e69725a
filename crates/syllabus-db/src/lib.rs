//! # syllabus-db
//!
//! libSQL persistence for Syllabus courses.
//!
//! Holds the relational course tree (course, stats, tags, lessons, content,
//! questions, options) and the engine that writes it:
//! - `store`: primitive row reads/writes, always against an explicit connection
//! - `diff`: the lesson-tree differ producing an edit plan
//! - `repos`: create/update reconciliation, publishing, and catalog reads
//! - `projection`: assembly of the `CourseAggregate` read model
//!
//! Every operation runs on its own checked-out connection; writes run as one
//! `UnitOfWork` on it.

pub mod diff;
pub mod error;
pub mod helpers;
mod migrations;
pub mod projection;
pub mod repos;
pub mod service;
pub mod store;
pub mod unit_of_work;

#[cfg(test)]
mod test_support;

use std::ops::Deref;
use std::time::Duration;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};

/// How long a connection waits on the database write lock before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const MEMORY_PATH: &str = ":memory:";

/// Central database handle for all Syllabus state.
///
/// File databases hand every operation its own connection, so an open
/// transaction never holds up readers (WAL) and writers only queue on the
/// SQLite write lock for up to `BUSY_TIMEOUT`. A `:memory:` database exists
/// only inside the connection that created it and keeps that one connection
/// in a shared slot instead.
pub struct CourseDb {
    db: libsql::Database,
    memory: Option<Mutex<libsql::Connection>>,
}

/// A connection checked out for one operation. Released when dropped.
pub enum Checkout<'a> {
    /// Fresh connection to a file database.
    Owned(libsql::Connection),
    /// The single connection of an in-memory database.
    Shared(MutexGuard<'a, libsql::Connection>),
}

impl Deref for Checkout<'_> {
    type Target = libsql::Connection;

    fn deref(&self) -> &libsql::Connection {
        match self {
            Self::Owned(conn) => conn,
            Self::Shared(guard) => &**guard,
        }
    }
}

impl CourseDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        configure(&conn).await?;

        let in_memory = path == MEMORY_PATH;
        if !in_memory {
            pragma(&conn, "PRAGMA journal_mode = WAL").await?;
        }

        migrations::run(&conn).await?;
        tracing::debug!(path, in_memory, "course database opened");

        Ok(Self {
            db,
            memory: in_memory.then(|| Mutex::new(conn)),
        })
    }

    /// Check out a connection for one operation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a new connection cannot be opened or
    /// configured.
    pub async fn checkout(&self) -> Result<Checkout<'_>, DatabaseError> {
        if let Some(slot) = &self.memory {
            return Ok(Checkout::Shared(slot.lock().await));
        }
        let conn = self.db.connect()?;
        configure(&conn).await?;
        Ok(Checkout::Owned(conn))
    }

    /// Re-run the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if any statement fails.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        let conn = self.checkout().await?;
        migrations::run(&conn).await
    }
}

/// Per-connection settings. SQLite does not persist either of them.
async fn configure(conn: &libsql::Connection) -> Result<(), DatabaseError> {
    pragma(conn, "PRAGMA foreign_keys = ON").await?;
    pragma(
        conn,
        &format!("PRAGMA busy_timeout = {}", BUSY_TIMEOUT.as_millis()),
    )
    .await
}

/// Run a PRAGMA and step it once; some of them report their new value as a row.
async fn pragma(conn: &libsql::Connection, sql: &str) -> Result<(), DatabaseError> {
    let mut rows = conn
        .query(sql, ())
        .await
        .map_err(|e| DatabaseError::Migration(format!("{sql}: {e}")))?;
    rows.next()
        .await
        .map_err(|e| DatabaseError::Migration(format!("{sql}: {e}")))?;
    Ok(())
}
