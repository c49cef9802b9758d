//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define the record shape shared by storage, search and export.
//!
//! # Invariants
//! - Every persisted contact is identified by a store-assigned `ContactId`.
//! - Name uniqueness is advisory; the model does not enforce it.

pub mod contact;
