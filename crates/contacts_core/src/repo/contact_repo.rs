//! Contact Store: repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD access to the `contacts` table over one owned connection.
//! - Track an explicit closed state for that connection.
//!
//! # Invariants
//! - Each write is a single autocommitted statement.
//! - `delete` matches names exactly and removes every matching row.
//! - Field values are never written to logs; only ids and row counts are.

use crate::db::DbError;
use crate::model::contact::{Contact, ContactFields, ContactId};
use log::{debug, error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const CONTACT_SELECT_SQL: &str = "SELECT id, name, age, email, phone FROM contacts";

pub type StoreResult<T> = Result<T, StoreError>;

/// Fatal store error. No operation is retried.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// The store was closed; the connection is gone.
    Closed,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Closed => write!(f, "contact store is closed"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Closed => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    /// Inserts a row and returns the store-assigned id. No duplicate check.
    fn add(&self, fields: &ContactFields) -> StoreResult<ContactId>;
    /// Returns a snapshot of every row in engine order.
    fn list(&self) -> StoreResult<Vec<Contact>>;
    /// Overwrites all mutable fields of row `id`; returns affected rows.
    fn update(&self, id: ContactId, fields: &ContactFields) -> StoreResult<usize>;
    /// Removes every row named exactly `name`; returns affected rows.
    fn delete(&self, name: &str) -> StoreResult<usize>;
}

/// SQLite-backed contact store owning its connection.
///
/// The store is `Send` but not `Sync`: it can move between threads, and
/// sharing it needs an external lock.
pub struct SqliteContactStore {
    conn: Option<Connection>,
}

impl SqliteContactStore {
    /// Takes ownership of an opened connection.
    ///
    /// The `contacts` table is assumed to exist already; see
    /// [`crate::db::open_db`] for a provisioning open.
    pub fn new(conn: Connection) -> Self {
        Self { conn: Some(conn) }
    }

    /// Whether [`Self::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    /// Releases the connection.
    ///
    /// # Errors
    /// - `StoreError::Closed` when already closed.
    /// - `StoreError::Db` when SQLite refuses to close; the store still ends
    ///   up closed and the handle is dropped.
    pub fn close(&mut self) -> StoreResult<()> {
        let Some(conn) = self.conn.take() else {
            error!("event=store_close module=store status=error error_code=already_closed");
            return Err(StoreError::Closed);
        };

        match conn.close() {
            Ok(()) => {
                info!("event=store_close module=store status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=store_close module=store status=error error_code=close_failed error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    fn conn(&self, event: &str) -> StoreResult<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            error!("event={event} module=store status=error error_code=store_closed");
            StoreError::Closed
        })
    }
}

impl ContactRepository for SqliteContactStore {
    fn add(&self, fields: &ContactFields) -> StoreResult<ContactId> {
        let started_at = Instant::now();
        let conn = self.conn("contact_add")?;

        let result = conn.execute(
            "INSERT INTO contacts (name, age, email, phone) VALUES (?1, ?2, ?3, ?4);",
            params![
                fields.name.as_str(),
                fields.age.as_str(),
                fields.email.as_str(),
                fields.phone.as_str(),
            ],
        );

        match result {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                debug!(
                    "event=contact_add module=store status=ok id={} duration_ms={}",
                    id,
                    started_at.elapsed().as_millis()
                );
                Ok(id)
            }
            Err(err) => Err(log_failure("contact_add", started_at, err)),
        }
    }

    fn list(&self) -> StoreResult<Vec<Contact>> {
        let started_at = Instant::now();
        let conn = self.conn("contact_list")?;

        let contacts =
            select_all(conn).map_err(|err| log_failure("contact_list", started_at, err))?;

        debug!(
            "event=contact_list module=store status=ok rows={} duration_ms={}",
            contacts.len(),
            started_at.elapsed().as_millis()
        );
        Ok(contacts)
    }

    fn update(&self, id: ContactId, fields: &ContactFields) -> StoreResult<usize> {
        let started_at = Instant::now();
        let conn = self.conn("contact_update")?;

        let changed = conn
            .execute(
                "UPDATE contacts
                 SET name = ?1, age = ?2, email = ?3, phone = ?4
                 WHERE id = ?5;",
                params![
                    fields.name.as_str(),
                    fields.age.as_str(),
                    fields.email.as_str(),
                    fields.phone.as_str(),
                    id,
                ],
            )
            .map_err(|err| log_failure("contact_update", started_at, err))?;

        debug!(
            "event=contact_update module=store status=ok id={} changed={} duration_ms={}",
            id,
            changed,
            started_at.elapsed().as_millis()
        );
        Ok(changed)
    }

    fn delete(&self, name: &str) -> StoreResult<usize> {
        let started_at = Instant::now();
        let conn = self.conn("contact_delete")?;

        let removed = conn
            .execute("DELETE FROM contacts WHERE name = ?1;", [name])
            .map_err(|err| log_failure("contact_delete", started_at, err))?;

        debug!(
            "event=contact_delete module=store status=ok removed={} duration_ms={}",
            removed,
            started_at.elapsed().as_millis()
        );
        Ok(removed)
    }
}

// No ORDER BY: rows come back in engine order.
fn select_all(conn: &Connection) -> rusqlite::Result<Vec<Contact>> {
    let mut stmt = conn.prepare(CONTACT_SELECT_SQL)?;
    let mut rows = stmt.query([])?;
    let mut contacts = Vec::new();

    while let Some(row) = rows.next()? {
        contacts.push(parse_contact_row(row)?);
    }

    Ok(contacts)
}

fn parse_contact_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
    })
}

fn log_failure(event: &str, started_at: Instant, err: rusqlite::Error) -> StoreError {
    error!(
        "event={} module=store status=error duration_ms={} error={}",
        event,
        started_at.elapsed().as_millis(),
        err
    );
    err.into()
}
