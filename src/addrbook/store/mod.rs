//! # Storage Layer
//!
//! Persistence is abstracted behind the [`ContactStore`] trait so the rest of the
//! application never touches the file format directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single pipe-delimited text file
//!   (`addressbook.txt` by default).
//! - [`memory::InMemoryStore`]: Keeps the encoded document in memory, for tests.
//!
//! Both go through [`codec`], which owns the line format:
//!
//! ```text
//! name|phone|email|address
//! ```
//!
//! One contact per line, no header, no escaping. A `|` inside a field corrupts
//! that record; the format is kept as-is so existing data files stay readable.

use crate::error::Result;
use crate::model::Contact;

pub mod codec;
pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving the whole contact collection.
pub trait ContactStore {
    /// Read every stored contact in storage order.
    ///
    /// `Ok(None)` means there is no existing data, which is not an error.
    fn load(&self) -> Result<Option<Vec<Contact>>>;

    /// Replace the stored data with `contacts`, in the order given.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Where the data lives, for user-facing messages.
    fn location(&self) -> String;
}
