use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(book: &AddressBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No contacts to display."));
    }
    CmdResult::default().with_listed_contacts(book.list().to_vec())
}
