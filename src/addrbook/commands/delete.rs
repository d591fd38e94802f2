use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(book: &mut AddressBook, name: &str) -> CmdResult {
    match book.delete(name) {
        Some(removed) => CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Contact deleted: {}",
                removed.name
            )))
            .with_affected_contacts(vec![removed]),
        None => CmdResult::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_book;

    #[test]
    fn deletes_exactly_one_contact() {
        let mut book = sample_book();
        let result = run(&mut book, "Bob");

        assert!(!result.not_found);
        assert_eq!(result.affected_contacts.len(), 1);
        assert_eq!(book.len(), 2);
        assert!(book.search("Bob").is_empty());
    }

    #[test]
    fn missing_name_reports_not_found() {
        let mut book = sample_book();
        let before = book.list().to_vec();
        let result = run(&mut book, "Alice");

        assert!(result.not_found);
        assert!(result.affected_contacts.is_empty());
        assert_eq!(book.list(), before.as_slice());
    }
}
