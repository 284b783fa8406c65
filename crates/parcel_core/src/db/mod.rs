//! Storage bootstrap for the parcel store.
//!
//! # Responsibility
//! - Hand out SQLite connections that already expose the `parcel` table.
//! - Classify failures below the store as connectivity or schema problems.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - No parcel row is touched before `schema::ensure_schema` succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failures of the storage engine underneath the parcel store.
///
/// Everything the store cannot attribute to a parcel (missing row, gated
/// write, constraint) lands here.
#[derive(Debug)]
pub enum DbError {
    /// SQLite could not open, reach or run a statement against the database.
    Connectivity(rusqlite::Error),
    /// A schema step failed while preparing the `parcel` table.
    SchemaStep {
        version: u32,
        source: rusqlite::Error,
    },
    /// The database was prepared by a newer tracker build.
    SchemaTooNew { found: u32, supported: u32 },
}

impl DbError {
    /// True when SQLite gave up waiting on a lock held by another connection.
    pub fn is_busy(&self) -> bool {
        let err = match self {
            Self::Connectivity(err) | Self::SchemaStep { source: err, .. } => err,
            Self::SchemaTooNew { .. } => return false,
        };
        matches!(
            err.sqlite_error_code(),
            Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
        )
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connectivity(err) => write!(f, "parcel database unavailable: {err}"),
            Self::SchemaStep { version, source } => {
                write!(f, "parcel schema step {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "parcel database uses schema {found}, this build supports up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connectivity(err) | Self::SchemaStep { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Connectivity(value)
    }
}
