//! In-memory search over contact snapshots.
//!
//! # Responsibility
//! - Narrow an already loaded contact list by a query string.
//! - Stay independent of storage; callers pass the snapshot in.

pub mod filter;
