use super::*;

use crate::store::ContactStore;
use super::contact::IdentityScheme;
use log::{debug, info, warn};

/// The contact collection of one process. Owns the records and the medium
/// they are written through to after every mutation.
pub struct ContactBook {
    contacts: Vec<Contact>,
    storage: Box<dyn ContactStore>,
    scheme: IdentityScheme,
}

impl ContactBook {
    pub fn open(storage: Box<dyn ContactStore>, scheme: IdentityScheme) -> Result<Self, AppError> {
        let contacts = merge_by_identity(storage.load()?, scheme);
        info!(
            "opened contact book: medium={} identity={} records={}",
            storage.medium(),
            scheme.is_which(),
            contacts.len()
        );

        Ok(Self {
            contacts,
            storage,
            scheme,
        })
    }

    pub fn medium(&self) -> &str {
        self.storage.medium()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Empty (or blank) query means "no filter"; otherwise a cross-field search.
    pub fn filter(&self, query: &str) -> SearchOutcome<'_> {
        if query.trim().is_empty() {
            return SearchOutcome::All(self.contacts.iter().collect());
        }

        let found = self.search(query.trim());
        if found.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(found)
        }
    }

    /// Sorted view of the collection. The stored order is left untouched.
    pub fn sorted(&self, key: SortKey, reverse: bool) -> Vec<&Contact> {
        let mut view: Vec<(String, &Contact)> = self
            .contacts
            .iter()
            .map(|c| (key.field(c).to_lowercase(), c))
            .collect();

        // Stable either way: equal keys keep insertion order
        if reverse {
            view.sort_by(|a, b| a.0.cmp(&b.0).reverse());
        } else {
            view.sort_by(|a, b| a.0.cmp(&b.0));
        }
        view.into_iter().map(|(_, c)| c).collect()
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.contacts)
    }

    fn position(&self, name: &str, surname: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.has_identity(name, surname, self.scheme))
    }
}

/// Folds rows sharing an identity into the first one, the way `add` would.
fn merge_by_identity(loaded: Vec<Contact>, scheme: IdentityScheme) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = Vec::with_capacity(loaded.len());

    for contact in loaded {
        let existing = contacts
            .iter_mut()
            .find(|c| c.has_identity(&contact.name, &contact.surname, scheme));
        match existing {
            Some(existing) => {
                warn!(
                    "merging duplicate row for '{}' under {} identity",
                    contact.full_name(),
                    scheme.is_which()
                );
                existing.phone = contact.phone;
                existing.email = contact.email;
            }
            None => contacts.push(contact),
        }
    }
    contacts
}

impl ContactDirectory for ContactBook {
    fn add(&mut self, contact: Contact) -> Result<Upsert, AppError> {
        let contact = contact.trimmed();
        contact.validate(self.scheme)?;

        let outcome = match self.position(&contact.name, &contact.surname) {
            Some(idx) => {
                let existing = &mut self.contacts[idx];
                existing.phone = contact.phone;
                existing.email = contact.email;
                Upsert::Updated
            }
            None => {
                self.contacts.push(contact);
                Upsert::Created
            }
        };
        debug!("add: {:?}, {} records", outcome, self.contacts.len());

        self.save()?;
        Ok(outcome)
    }

    fn find_one(&self, name: &str, surname: &str) -> Option<&Contact> {
        let found = self
            .contacts
            .iter()
            .find(|c| c.has_identity(name, surname, self.scheme));
        debug!("find_one: found={}", found.is_some());
        found
    }

    fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();

        let found: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| c.matches_lowercase(&query))
            .collect();
        debug!("search: {} of {} records matched", found.len(), self.contacts.len());
        found
    }

    fn delete(&mut self, name: &str, surname: &str) -> Result<Option<Contact>, AppError> {
        let Some(idx) = self.position(name, surname) else {
            debug!("delete: no matching identity, nothing removed");
            return Ok(None);
        };

        let removed = self.contacts.remove(idx);
        debug!("delete: removed record at {}, {} left", idx, self.contacts.len());

        self.save()?;
        Ok(Some(removed))
    }

    fn list_all(&self) -> &[Contact] {
        &self.contacts
    }
}
