//! SQLite storage bootstrap for the contact book.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Provision the single `contacts` table when it is missing.
//!
//! # Invariants
//! - There is exactly one schema shape; no versioning, no migrations.
//! - `CREATE TABLE IF NOT EXISTS` never touches existing rows.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory, provision_schema};

/// Name of the only table owned by this crate.
pub const CONTACTS_TABLE: &str = "contacts";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
