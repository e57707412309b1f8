//! SQLite file backing the document store.
//!
//! # Responsibility
//! - Open the database file and bring its `kv_store` table up to date.
//! - Refuse files written by a newer build instead of guessing at them.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - The document is never read or written before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The database file could not be opened or created.
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    Sqlite(rusqlite::Error),
    /// `user_version` is ahead of the newest migration this build ships.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open store file {}: {source}", path.display())
            }
            Self::Sqlite(err) => write!(f, "store database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "store schema v{found} was written by a newer build (this build reads up to v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
