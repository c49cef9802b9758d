//! Tabular export of contact snapshots.
//!
//! # Responsibility
//! - Shape a contact list into a header + rows table.
//! - Name export files with a sortable local timestamp.
//! - Hand the table to a pluggable writer.
//!
//! # Invariants
//! - The header is always `ID, NAME, AGE, EMAIL, PHONE`.
//! - File names follow `DATA %Y-%m-%d_%H-%M-%S.<ext>`.

pub mod table;
