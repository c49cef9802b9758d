//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the contact data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Not-found on update/delete is reported as zero affected rows, never as
//!   an error.
//! - A closed store rejects every further call with `StoreError::Closed`.

pub mod contact_repo;
