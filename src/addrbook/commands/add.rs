use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;

pub fn run(book: &mut AddressBook, contact: Contact) -> Result<CmdResult> {
    book.add(contact.clone())?;
    Ok(CmdResult::default()
        .with_affected_contacts(vec![contact])
        .with_message(CmdMessage::success("Contact added successfully.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::AddrBookError;

    #[test]
    fn added_contact_is_listed_first() {
        let mut book = AddressBook::new();
        run(&mut book, Contact::new("Old", "5550001", "o@o.io", "")).unwrap();
        run(&mut book, Contact::new("New", "5550002", "n@n.io", "")).unwrap();

        let listed = list::run(&book).listed_contacts;
        assert_eq!(listed[0].name, "New");
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn invalid_contact_is_an_error() {
        let mut book = AddressBook::new();
        let result = run(&mut book, Contact::new("Bad", "123", "b@b.io", ""));
        assert!(matches!(result, Err(AddrBookError::InvalidPhone(_))));
        assert!(book.is_empty());
    }
}
