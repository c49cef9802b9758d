//! Name filter for type-as-you-search.
//!
//! # Invariants
//! - An empty query returns the input unchanged, never an empty list.
//! - Matching is case-insensitive substring containment on `name` only.
//! - Output keeps the relative order of the input.

use crate::model::contact::Contact;

/// Returns contacts whose name contains `query`, ignoring case.
pub fn filter_by_name(contacts: &[Contact], query: &str) -> Vec<Contact> {
    if query.is_empty() {
        return contacts.to_vec();
    }

    let needle = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
