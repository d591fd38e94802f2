use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{ContactUpdate, Field};

pub fn run(book: &mut AddressBook, name: &str, update: &ContactUpdate) -> CmdResult {
    let Some(report) = book.edit(name, update) else {
        return CmdResult::not_found();
    };

    let mut result = CmdResult::default();
    for field in &report.rejected {
        result.add_message(CmdMessage::warning(format!(
            "Invalid {}. Keeping current.",
            field_label(*field)
        )));
    }
    result.add_message(CmdMessage::success("Contact updated successfully."));
    result.rejected_fields = report.rejected;
    result.affected_contacts.push(report.contact);
    result
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Phone => "phone number",
        Field::Email => "email",
        Field::Address => "address",
    }
}
