//! Export table, file naming and writers.

use crate::model::contact::Contact;
use chrono::NaiveDateTime;
use log::{error, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const EXPORT_HEADER: [&str; 5] = ["ID", "NAME", "AGE", "EMAIL", "PHONE"];

const FILE_STEM_FORMAT: &str = "DATA %Y-%m-%d_%H-%M-%S";

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "export write failed: {err}"),
            Self::Json(err) => write!(f, "export encoding failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Header plus one stringified row per contact, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTable {
    pub header: [&'static str; 5],
    pub rows: Vec<[String; 5]>,
}

impl ExportTable {
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let rows = contacts
            .iter()
            .map(|contact| {
                [
                    contact.id.to_string(),
                    contact.name.clone(),
                    contact.age.clone(),
                    contact.email.clone(),
                    contact.phone.clone(),
                ]
            })
            .collect();

        Self {
            header: EXPORT_HEADER,
            rows,
        }
    }
}

/// Sink for an [`ExportTable`]. Implementations own the document layout.
pub trait TableExporter {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;
    fn write_table(&self, table: &ExportTable, writer: &mut dyn Write) -> ExportResult<()>;
}

/// Writes the table as pretty-printed JSON `{ "header": [...], "rows": [[...]] }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl TableExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write_table(&self, table: &ExportTable, writer: &mut dyn Write) -> ExportResult<()> {
        serde_json::to_writer_pretty(&mut *writer, table)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Builds `DATA <date>_<time>.<ext>` for the given local timestamp.
pub fn export_file_name(extension: &str, at: NaiveDateTime) -> String {
    format!("{}.{}", at.format(FILE_STEM_FORMAT), extension)
}

/// Writes `contacts` into `dir` using `exporter` and returns the file path.
///
/// An existing file with the same name is overwritten.
pub fn export_to_dir(
    dir: impl AsRef<Path>,
    exporter: &dyn TableExporter,
    contacts: &[Contact],
    at: NaiveDateTime,
) -> ExportResult<PathBuf> {
    let path = dir
        .as_ref()
        .join(export_file_name(exporter.extension(), at));
    let table = ExportTable::from_contacts(contacts);

    match write_file(&path, exporter, &table) {
        Ok(()) => {
            info!(
                "event=export module=export status=ok format={} rows={}",
                exporter.extension(),
                table.rows.len()
            );
            Ok(path)
        }
        Err(err) => {
            error!(
                "event=export module=export status=error format={} error={}",
                exporter.extension(),
                err
            );
            Err(err)
        }
    }
}

fn write_file(path: &Path, exporter: &dyn TableExporter, table: &ExportTable) -> ExportResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    exporter.write_table(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::export_file_name;
    use chrono::NaiveDate;

    #[test]
    fn file_name_pads_date_and_time_fields() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|date| date.and_hms_opt(9, 5, 1))
            .expect("valid timestamp");
        assert_eq!(export_file_name("pdf", at), "DATA 2024-03-07_09-05-01.pdf");
    }
}
