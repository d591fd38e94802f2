//! # The Address Book
//!
//! [`AddressBook`] is the in-memory record store. It exclusively owns every
//! [`Contact`] and keeps them in a single ordered sequence:
//!
//! - New contacts go to the **front**, so until a sort the order is
//!   most-recently-added first.
//! - [`AddressBook::sort`] reorders by name (byte-wise, stable) and that order
//!   holds until the next insertion or sort.
//!
//! Names are the lookup key for delete and edit. There is no uniqueness
//! constraint, so with duplicate names only the first match in store order is
//! reachable. A linear scan is enough at this scale and keeps that
//! first-match-wins behavior trivially correct.
//!
//! Phone and email are validated whenever they are written through
//! [`AddressBook::add`] or [`AddressBook::edit`]. Records pushed in by
//! [`AddressBook::extend_front`] (the load path) are taken as-is.

use crate::error::{AddrBookError, Result};
use crate::model::{clamp, Contact, ContactUpdate, Field, ADDRESS_LIMIT, NAME_LIMIT};
use crate::validate::{is_valid_email, is_valid_phone};

#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

/// What an edit did to the matched contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    /// The contact as it stands after the edit.
    pub contact: Contact,
    pub changed: Vec<Field>,
    pub rejected: Vec<Field>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// All contacts in store order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Inserts a contact at the front after checking phone and email.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if !is_valid_phone(&contact.phone) {
            return Err(AddrBookError::InvalidPhone(contact.phone));
        }
        if !is_valid_email(&contact.email) {
            return Err(AddrBookError::InvalidEmail(contact.email));
        }
        self.contacts.insert(0, contact);
        Ok(())
    }

    /// Removes the first contact whose name is exactly `name`.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let pos = self.position(name)?;
        Some(self.contacts.remove(pos))
    }

    /// Applies `update` to the first contact named exactly `name`.
    ///
    /// Blank values keep the current field. An invalid phone or email is
    /// skipped and reported while the remaining fields are still applied.
    pub fn edit(&mut self, name: &str, update: &ContactUpdate) -> Option<EditReport> {
        let pos = self.position(name)?;
        let contact = &mut self.contacts[pos];
        let mut report = EditReport::default();

        if !update.name.is_empty() {
            contact.name = clamp(update.name.clone(), NAME_LIMIT);
            report.changed.push(Field::Name);
        }

        if !update.phone.is_empty() {
            if is_valid_phone(&update.phone) {
                contact.phone = update.phone.clone();
                report.changed.push(Field::Phone);
            } else {
                report.rejected.push(Field::Phone);
            }
        }

        if !update.email.is_empty() {
            if is_valid_email(&update.email) {
                contact.email = update.email.clone();
                report.changed.push(Field::Email);
            } else {
                report.rejected.push(Field::Email);
            }
        }

        if !update.address.is_empty() {
            contact.address = clamp(update.address.clone(), ADDRESS_LIMIT);
            report.changed.push(Field::Address);
        }

        report.contact = contact.clone();
        Some(report)
    }

    /// Contacts whose name, phone or email contains `query`, in store order.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| {
                c.name.contains(query) || c.phone.contains(query) || c.email.contains(query)
            })
            .cloned()
            .collect()
    }

    /// Stable ascending sort by name, compared byte-wise.
    pub fn sort(&mut self) {
        self.contacts.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Pushes each record to the front in turn, so they end up reversed and
    /// ahead of whatever the book already held.
    pub fn extend_front<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut incoming: Vec<Contact> = records.into_iter().collect();
        incoming.reverse();
        self.contacts.splice(0..0, incoming);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name == name)
    }
}
