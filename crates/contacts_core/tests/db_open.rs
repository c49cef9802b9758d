use contacts_core::db::{open_db, open_db_in_memory, provision_schema, CONTACTS_TABLE};
use contacts_core::{ContactFields, ContactRepository, SqliteContactStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_provisions_contacts_table() {
    let conn = open_db_in_memory().unwrap();
    assert_table_exists(&conn, CONTACTS_TABLE);
}

#[test]
fn reopening_file_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.db");

    let mut store = SqliteContactStore::new(open_db(&path).unwrap());
    store
        .add(&ContactFields::new("Ana", "30", "ana@x.com", "123456789"))
        .unwrap();
    store.close().unwrap();

    let store = SqliteContactStore::new(open_db(&path).unwrap());
    let contacts = store.list().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ana");
}

#[test]
fn provisioning_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO contacts (name, age, email, phone) VALUES ('Ana', '30', 'a', '1');",
        [],
    )
    .unwrap();

    provision_schema(&conn).unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn opening_a_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(open_db(dir.path()).is_err());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
