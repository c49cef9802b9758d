//! Contact domain model.
//!
//! # Responsibility
//! - Define the persisted `Contact` record with named fields.
//! - Define `ContactFields`, the mutable part captured from user input.
//!
//! # Invariants
//! - `id` is assigned by the store, never reused and never changed.
//! - `age` and `phone` are kept as text exactly as entered.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier.
pub type ContactId = i64;

/// The four user-editable fields of a contact.
///
/// Values arrive already stringified from the input surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Returns the first empty field name, in form order.
    ///
    /// Only emptiness is checked; content format is not validated.
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("age", &self.age),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }

    /// Whether every field carries a non-empty value.
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}

/// One persisted row of the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Returns the editable fields, e.g. to prefill an edit form.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            age: self.age.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Whether this row carries exactly `fields`, ignoring `id`.
    pub fn matches_fields(&self, fields: &ContactFields) -> bool {
        self.name == fields.name
            && self.age == fields.age
            && self.email == fields.email
            && self.phone == fields.phone
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactFields};

    #[test]
    fn first_missing_reports_fields_in_form_order() {
        let fields = ContactFields::new("", "30", "", "123");
        assert_eq!(fields.first_missing(), Some("name"));

        let fields = ContactFields::new("Ana", "30", "", "");
        assert_eq!(fields.first_missing(), Some("email"));
    }

    #[test]
    fn whitespace_counts_as_present() {
        let fields = ContactFields::new(" ", "1", "a", "2");
        assert!(fields.is_complete());
    }

    #[test]
    fn fields_roundtrip_through_contact() {
        let contact = Contact {
            id: 7,
            name: "Ana".to_string(),
            age: "30".to_string(),
            email: "ana@x.com".to_string(),
            phone: "123456789".to_string(),
        };
        let fields = contact.fields();
        assert!(contact.matches_fields(&fields));
        assert_eq!(fields.name, "Ana");
    }
}
