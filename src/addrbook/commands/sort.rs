use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(book: &mut AddressBook) -> CmdResult {
    book.sort();
    CmdResult::default().with_message(CmdMessage::success("Contacts sorted by name."))
}
