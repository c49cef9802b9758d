use chrono::NaiveDate;
use contacts_core::db::open_db_in_memory;
use contacts_core::{
    export_to_dir, ContactFields, ContactRepository, ExportTable, JsonExporter,
    SqliteContactStore, TableExporter, EXPORT_HEADER,
};

fn seeded_store() -> SqliteContactStore {
    let store = SqliteContactStore::new(open_db_in_memory().unwrap());
    store
        .add(&ContactFields::new("Ana", "30", "ana@x.com", "123456789"))
        .unwrap();
    store
        .add(&ContactFields::new("Bob", "41", "bob@x.com", "987654321"))
        .unwrap();
    store
}

#[test]
fn table_has_header_and_one_row_per_contact() {
    let contacts = seeded_store().list().unwrap();

    let table = ExportTable::from_contacts(&contacts);

    assert_eq!(table.header, EXPORT_HEADER);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        table.rows[0],
        [
            contacts[0].id.to_string(),
            "Ana".to_string(),
            "30".to_string(),
            "ana@x.com".to_string(),
            "123456789".to_string(),
        ]
    );
}

#[test]
fn json_exporter_writes_header_and_rows() {
    let contacts = seeded_store().list().unwrap();
    let table = ExportTable::from_contacts(&contacts);

    let mut buffer = Vec::new();
    JsonExporter.write_table(&table, &mut buffer).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(
        value["header"],
        serde_json::json!(["ID", "NAME", "AGE", "EMAIL", "PHONE"])
    );
    assert_eq!(value["rows"][1][1], "Bob");
}

#[test]
fn export_to_dir_uses_timestamped_name() {
    let dir = tempfile::tempdir().unwrap();
    let contacts = seeded_store().list().unwrap();
    let at = NaiveDate::from_ymd_opt(2024, 11, 30)
        .unwrap()
        .and_hms_opt(18, 4, 59)
        .unwrap();

    let path = export_to_dir(dir.path(), &JsonExporter, &contacts, at).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "DATA 2024-11-30_18-04-59.json"
    );
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn export_of_empty_list_still_has_header() {
    let table = ExportTable::from_contacts(&[]);
    let mut buffer = Vec::new();
    JsonExporter.write_table(&table, &mut buffer).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["header"].as_array().unwrap().len(), 5);
    assert!(value["rows"].as_array().unwrap().is_empty());
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let at = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    assert!(export_to_dir(&missing, &JsonExporter, &[], at).is_err());
}
