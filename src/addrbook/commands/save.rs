use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(book: &AddressBook, store: &mut S) -> Result<CmdResult> {
    store.save(book.list())?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contacts saved to {}.",
        store.location()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_book;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn saves_in_current_store_order() {
        let book = sample_book();
        let mut store = InMemoryStore::new();
        run(&book, &mut store).unwrap();

        assert_eq!(
            store.document().unwrap(),
            "Bob|(555) 0102|bob@test.org|2 Pine Rd\n\
             alice|555-0101|alice@example.com|1 Oak Ave\n\
             Charlie|555-0103|charlie@example.com|3 Elm St\n"
        );
    }

    #[test]
    fn write_failure_is_returned() {
        let book = sample_book();
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(run(&book, &mut store).is_err());
    }
}
