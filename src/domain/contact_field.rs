//! ContactField identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three required fields of a contact.
///
/// Carried by validation errors so callers can tell which value was absent.
///
/// # Example
///
/// ```
/// use contact_manager::domain::ContactField;
///
/// assert_eq!(ContactField::PhoneNumber.to_string(), "phone number");
/// assert_eq!(ContactField::PhoneNumber.key(), "phone_number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl ContactField {
    /// All fields, in the order they are validated.
    pub const ALL: [ContactField; 3] = [Self::FirstName, Self::LastName, Self::PhoneNumber];

    /// Serialized key of the field, as used in JSON payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::PhoneNumber => "phone_number",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::PhoneNumber => "phone number",
        };
        write!(f, "{}", label)
    }
}
