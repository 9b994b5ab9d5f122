pub mod book;
pub mod contact;

use crate::errors::AppError;
use contact::Contact;

/// The operations any interface (CLI, web form, GUI) may call on a contact
/// collection, whatever backs it.
pub trait ContactDirectory {
    /// Inserts a new contact or, when one with the same identity exists,
    /// overwrites its phone and email in place.
    fn add(&mut self, contact: Contact) -> Result<Upsert, AppError>;

    /// Case-insensitive exact match on the identity key.
    fn find_one(&self, name: &str, surname: &str) -> Option<&Contact>;

    /// Case-insensitive substring match against every field, in insertion order.
    fn search(&self, query: &str) -> Vec<&Contact>;

    /// Removes the contact with the given identity. Missing identities are a no-op.
    fn delete(&mut self, name: &str, surname: &str) -> Result<Option<Contact>, AppError>;

    fn list_all(&self) -> &[Contact];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Result of filtering the collection for display.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Empty query: no filter applied.
    All(Vec<&'a Contact>),
    Matches(Vec<&'a Contact>),
    NoMatches,
}

impl<'a> SearchOutcome<'a> {
    pub fn records(&self) -> &[&'a Contact] {
        match self {
            SearchOutcome::All(records) | SearchOutcome::Matches(records) => records,
            SearchOutcome::NoMatches => &[],
        }
    }

    pub fn is_no_matches(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Surname,
    Phone,
    Email,
}

impl SortKey {
    pub fn field<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            SortKey::Name => &contact.name,
            SortKey::Surname => &contact.surname,
            SortKey::Phone => &contact.phone,
            SortKey::Email => &contact.email,
        }
    }
}
