//! Contact use-case service.
//!
//! # Responsibility
//! - Provide the form-level entry points: save, update, delete, search,
//!   select.
//! - Decline invalid requests with an outcome value instead of an error.
//!
//! # Invariants
//! - Name uniqueness is checked against a fresh `list()` on save only. Rows
//!   written through the repository directly, or renamed via update, can
//!   still share a name.
//! - Store failures pass through unchanged.

use crate::model::contact::{Contact, ContactFields, ContactId};
use crate::repo::contact_repo::{ContactRepository, StoreResult};
use crate::search::filter::filter_by_name;
use log::{info, warn};

/// Result of [`ContactService::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(ContactId),
    /// A field was empty; nothing was written.
    Incomplete { field: &'static str },
    /// A contact with the same name already exists; nothing was written.
    DuplicateName,
}

/// Result of [`ContactService::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// `changed` is 0 when the id no longer exists.
    Updated { changed: usize },
    Incomplete { field: &'static str },
}

/// Use-case service wrapper around a contact repository.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Gives the repository back, e.g. to close it.
    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Adds a contact unless a field is empty or the name is taken.
    pub fn save(&self, fields: &ContactFields) -> StoreResult<SaveOutcome> {
        if let Some(field) = fields.first_missing() {
            warn!("event=contact_save module=service status=declined reason=incomplete field={field}");
            return Ok(SaveOutcome::Incomplete { field });
        }

        let name_taken = self
            .repo
            .list()?
            .iter()
            .any(|contact| contact.name == fields.name);
        if name_taken {
            warn!("event=contact_save module=service status=declined reason=duplicate_name");
            return Ok(SaveOutcome::DuplicateName);
        }

        let id = self.repo.add(fields)?;
        info!("event=contact_save module=service status=ok id={id}");
        Ok(SaveOutcome::Added(id))
    }

    /// Overwrites row `id` unless a field is empty.
    pub fn update(&self, id: ContactId, fields: &ContactFields) -> StoreResult<UpdateOutcome> {
        if let Some(field) = fields.first_missing() {
            warn!("event=contact_update module=service status=declined reason=incomplete field={field}");
            return Ok(UpdateOutcome::Incomplete { field });
        }

        let changed = self.repo.update(id, fields)?;
        info!("event=contact_update module=service status=ok id={id} changed={changed}");
        Ok(UpdateOutcome::Updated { changed })
    }

    /// Deletes every contact named exactly `name`.
    pub fn delete_by_name(&self, name: &str) -> StoreResult<usize> {
        let removed = self.repo.delete(name)?;
        info!("event=contact_delete module=service status=ok removed={removed}");
        Ok(removed)
    }

    pub fn list(&self) -> StoreResult<Vec<Contact>> {
        self.repo.list()
    }

    /// Lists contacts and applies [`filter_by_name`].
    pub fn search(&self, query: &str) -> StoreResult<Vec<Contact>> {
        let contacts = self.repo.list()?;
        Ok(filter_by_name(&contacts, query))
    }

    /// Returns the first contact, in engine order, named exactly `name`.
    pub fn select_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        Ok(self
            .repo
            .list()?
            .into_iter()
            .find(|contact| contact.name == name))
    }
}
