//! Core domain logic for the contact book.
//! This crate owns storage, search and export; UI layers stay outside.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use export::table::{
    export_file_name, export_to_dir, ExportError, ExportResult, ExportTable, JsonExporter,
    TableExporter, EXPORT_HEADER,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactFields, ContactId};
pub use repo::contact_repo::{ContactRepository, SqliteContactStore, StoreError, StoreResult};
pub use search::filter::filter_by_name;
pub use service::contact_service::{ContactService, SaveOutcome, UpdateOutcome};
