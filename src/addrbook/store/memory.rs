use super::{codec, ContactStore};
use crate::error::{AddrBookError, Result};
use crate::model::Contact;

/// In-memory storage for testing.
///
/// Holds the encoded document rather than the contacts themselves, so tests
/// exercise the same line format as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `document` as if it had been read from disk.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            simulate_write_error: false,
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Make every subsequent save fail with an IO error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        Ok(self.document.as_deref().map(codec::decode))
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.simulate_write_error {
            return Err(AddrBookError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "simulated write error",
            )));
        }
        self.document = Some(codec::encode(contacts));
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::AddressBook;

    /// A few well-formed contacts, in the order they are added.
    pub fn sample_contacts() -> Vec<Contact> {
        vec![
            Contact::new("Charlie", "555-0103", "charlie@example.com", "3 Elm St"),
            Contact::new("alice", "555-0101", "alice@example.com", "1 Oak Ave"),
            Contact::new("Bob", "(555) 0102", "bob@test.org", "2 Pine Rd"),
        ]
    }

    /// A book built by adding [`sample_contacts`] in order.
    pub fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        for contact in sample_contacts() {
            book.add(contact).expect("fixture contacts are valid");
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_data() {
        assert!(InMemoryStore::new().load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_keeps_order() {
        let mut store = InMemoryStore::new();
        let contacts = fixtures::sample_contacts();
        store.save(&contacts).unwrap();
        assert_eq!(store.load().unwrap(), Some(contacts));
    }

    #[test]
    fn simulated_write_error_keeps_old_document() {
        let mut store = InMemoryStore::with_document("A|5550001|a@a.io|\n");
        store.set_simulate_write_error(true);

        assert!(store.save(&[]).is_err());
        assert_eq!(store.document(), Some("A|5550001|a@a.io|\n"));
    }
}
