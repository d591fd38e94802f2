use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(book: &AddressBook, query: &str) -> CmdResult {
    let matches = book.search(query);
    if matches.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No contacts found."));
    }
    CmdResult::default().with_listed_contacts(matches)
}
