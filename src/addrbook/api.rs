//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every address book operation, whatever the UI.
//!
//! `AddrBookApi<S: ContactStore>` owns both the in-memory [`AddressBook`] and
//! the persistence backend:
//! - Production: `AddrBookApi<FileStore>`
//! - Testing: `AddrBookApi<InMemoryStore>`
//!
//! Every method returns `Result<CmdResult>`. Outcomes a user should hear about
//! but that are not failures (a missing contact, an empty search) travel as
//! messages inside the `CmdResult`; `Err` is reserved for rejected input and
//! I/O failures. Nothing here prints or exits.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::model::{Contact, ContactUpdate};
use crate::store::ContactStore;

pub struct AddrBookApi<S: ContactStore> {
    book: AddressBook,
    store: S,
}

impl<S: ContactStore> AddrBookApi<S> {
    /// Wraps `store` with an empty book. Call [`AddrBookApi::load`] to read data.
    pub fn new(store: S) -> Self {
        Self {
            book: AddressBook::new(),
            store,
        }
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, contact)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        Ok(commands::delete::run(&mut self.book, name))
    }

    pub fn edit_contact(
        &mut self,
        name: &str,
        update: &ContactUpdate,
    ) -> Result<commands::CmdResult> {
        Ok(commands::edit::run(&mut self.book, name, update))
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        Ok(commands::search::run(&self.book, query))
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        Ok(commands::list::run(&self.book))
    }

    pub fn sort(&mut self) -> Result<commands::CmdResult> {
        Ok(commands::sort::run(&mut self.book))
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&self.book, &mut self.store)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.book, &self.store)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        Ok(commands::clear::run(&mut self.book))
    }

    /// Saves, then releases every contact. The book is cleared even when the
    /// save fails; the save error is still returned.
    pub fn shutdown(&mut self) -> Result<commands::CmdResult> {
        let saved = commands::save::run(&self.book, &mut self.store);
        commands::clear::run(&mut self.book);
        saved
    }

    /// True when a contact named exactly `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.book.iter().any(|c| c.name == name)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
