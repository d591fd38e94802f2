use crate::book::AddressBook;
use crate::commands::CmdResult;

pub fn run(book: &mut AddressBook) -> CmdResult {
    let released = book.len();
    book.clear();
    log::debug!("released {} contacts", released);
    CmdResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_book;

    #[test]
    fn empties_the_book_and_tolerates_repeats() {
        let mut book = sample_book();
        run(&mut book);
        run(&mut book);
        assert!(book.is_empty());
    }
}
