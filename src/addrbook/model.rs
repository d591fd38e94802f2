/// Longest name kept, in chars.
pub const NAME_LIMIT: usize = 99;
/// Longest address kept, in chars.
pub const ADDRESS_LIMIT: usize = 199;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    /// Builds a contact, truncating free-text fields to their limits.
    ///
    /// No validation happens here; the book validates phone and email on write.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: clamp(name.into(), NAME_LIMIT),
            phone: phone.into(),
            email: email.into(),
            address: clamp(address.into(), ADDRESS_LIMIT),
        }
    }
}

/// New values for an edit. An empty string keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

}

/// The editable fields, in the order an edit visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
}

pub(crate) fn clamp(mut value: String, limit: usize) -> String {
    if let Some((idx, _)) = value.char_indices().nth(limit) {
        value.truncate(idx);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_truncates_long_name_and_address() {
        let long_name = "n".repeat(150);
        let long_address = "a".repeat(300);
        let contact = Contact::new(long_name, "5551234", "a@b.c", long_address);

        assert_eq!(contact.name.chars().count(), NAME_LIMIT);
        assert_eq!(contact.address.chars().count(), ADDRESS_LIMIT);
    }

    #[test]
    fn clamp_respects_char_boundaries() {
        let value = "é".repeat(5);
        assert_eq!(clamp(value, 3), "ééé");
    }

    #[test]
    fn clamp_leaves_short_values_alone() {
        assert_eq!(clamp("short".to_string(), 99), "short");
    }

    #[test]
    fn new_keeps_long_email_intact() {
        let email = format!("{}@example.com", "u".repeat(100));
        let contact = Contact::new("A", "5551234", email.clone(), "");
        assert_eq!(contact.email, email);
    }
}
