//! Syntax checks for phone numbers and email addresses.
//!
//! These are deliberately shallow: they gate what the book accepts on write,
//! they do not parse real phone numbers or mail domains.

const PHONE_MIN_LEN: usize = 7;
const PHONE_MAX_LEN: usize = 15;

/// True when `phone` is 7 to 15 characters of digits, `-`, `(`, `)` or space.
pub fn is_valid_phone(phone: &str) -> bool {
    (PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&phone.len())
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '(' | ')' | ' '))
}

/// True when `email` has an `@` whose first following `.` is not adjacent to it.
pub fn is_valid_email(email: &str) -> bool {
    let Some(at) = email.find('@') else {
        return false;
    };
    match email[at..].find('.') {
        Some(offset) => offset > 1,
        None => false,
    }
}
