use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

/// Pulls stored contacts into the front of the book, then sorts the whole book
/// by name. With no stored data the book is left untouched.
pub fn run<S: ContactStore>(book: &mut AddressBook, store: &S) -> Result<CmdResult> {
    let Some(records) = store.load()? else {
        return Ok(CmdResult::default());
    };

    let count = records.len();
    book.extend_front(records);
    book.sort();

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Loaded {} contact{} from {}.",
        count,
        if count == 1 { "" } else { "s" },
        store.location()
    ))))
}
