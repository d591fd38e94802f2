//! Pipe-delimited line format.

use crate::model::Contact;

pub const DELIMITER: char = '|';

/// Encodes one contact as `name|phone|email|address`, without a newline.
pub fn encode_line(contact: &Contact) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}",
        contact.name,
        contact.phone,
        contact.email,
        contact.address,
        d = DELIMITER
    )
}

/// Decodes one line. Missing trailing fields come back empty and anything past
/// the fourth field is dropped.
pub fn decode_line(line: &str) -> Contact {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut fields = line.split(DELIMITER);
    let mut next = || fields.next().unwrap_or_default().to_string();

    let name = next();
    let phone = next();
    let email = next();
    let address = next();
    Contact::new(name, phone, email, address)
}

/// Encodes a whole collection, one newline-terminated line per contact.
pub fn encode(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&encode_line(contact));
        out.push('\n');
    }
    out
}

/// Decodes a whole document in line order, skipping blank lines.
pub fn decode(text: &str) -> Vec<Contact> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(decode_line)
        .collect()
}
