//! Contact model representing a person in the contact list.

use crate::domain::ContactField;
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored contact.
///
/// Fields are private: once a contact is constructed it cannot be changed.
/// Deserialization rejects `null` for any of the three fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

/// An unvalidated request to create a contact.
///
/// A missing key and an explicit `null` in JSON both deserialize to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NewContact {
    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Phone number (format is not checked)
    pub phone_number: Option<String>,
}

impl Contact {
    /// Create a contact from three present values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Full name, first then last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.phone_number
        )
    }
}

impl NewContact {
    /// Build a request from optional values.
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Self {
        Self {
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            phone_number: phone_number.map(str::to_string),
        }
    }

    /// Value of one field of the request.
    pub fn field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FirstName => self.first_name.as_deref(),
            ContactField::LastName => self.last_name.as_deref(),
            ContactField::PhoneNumber => self.phone_number.as_deref(),
        }
    }

    /// Returns the first absent field, checked in first, last, phone order.
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.field(*field).is_none())
    }

    /// Validate the request and build a `Contact`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` naming the first absent field.
    pub fn into_contact(self) -> ContactResult<Contact> {
        match self.missing_field() {
            Some(field) => Err(ContactError::InvalidArgument { field }),
            // All three are present here
            None => Ok(Contact::new(
                self.first_name.unwrap_or_default(),
                self.last_name.unwrap_or_default(),
                self.phone_number.unwrap_or_default(),
            )),
        }
    }
}

impl TryFrom<NewContact> for Contact {
    type Error = ContactError;

    fn try_from(request: NewContact) -> Result<Self, Self::Error> {
        request.into_contact()
    }
}

impl From<&Contact> for NewContact {
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: Some(contact.first_name.clone()),
            last_name: Some(contact.last_name.clone()),
            phone_number: Some(contact.phone_number.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("John", "Doe", "0123456789");
        assert_eq!(contact.first_name(), "John");
        assert_eq!(contact.last_name(), "Doe");
        assert_eq!(contact.phone_number(), "0123456789");
        assert_eq!(contact.full_name(), "John Doe");
    }

    #[test]
    fn test_contact_display() {
        let contact = Contact::new("John", "Doe", "0123456789");
        assert_eq!(contact.to_string(), "John Doe (0123456789)");
    }

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::new("John", "Doe", "0123456789");
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(
            json,
            r#"{"first_name":"John","last_name":"Doe","phone_number":"0123456789"}"#
        );
    }

    #[test]
    fn test_contact_deserialization_rejects_null() {
        let json = r#"{"first_name":null,"last_name":"Doe","phone_number":"0123456789"}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_contact_into_contact() {
        let request = NewContact::new(Some("John"), Some("Doe"), Some("0123456789"));
        assert!(request.missing_field().is_none());

        let contact = request.into_contact().unwrap();
        assert_eq!(contact, Contact::new("John", "Doe", "0123456789"));
    }

    #[test]
    fn test_new_contact_reports_first_missing_field() {
        let request = NewContact::new(None, None, Some("0123456789"));
        assert_eq!(request.missing_field(), Some(ContactField::FirstName));

        let err = Contact::try_from(request).unwrap_err();
        assert_eq!(err.missing_field(), Some(ContactField::FirstName));

        let request = NewContact::new(Some("John"), None, None);
        assert_eq!(request.missing_field(), Some(ContactField::LastName));

        let request = NewContact::new(Some("John"), Some("Doe"), None);
        let err = request.into_contact().unwrap_err();
        assert_eq!(err.missing_field(), Some(ContactField::PhoneNumber));
    }

    #[test]
    fn test_missing_field_agrees_with_into_contact() {
        let values = [None, Some("x")];
        for first in values {
            for last in values {
                for phone in values {
                    let request = NewContact::new(first, last, phone);
                    let expected = request.missing_field();
                    let actual = request.into_contact().err().and_then(|e| e.missing_field());
                    assert_eq!(actual, expected);
                }
            }
        }
    }

    #[test]
    fn test_new_contact_field_accessor() {
        let request = NewContact::new(Some("John"), None, Some("0123456789"));
        assert_eq!(request.field(ContactField::FirstName), Some("John"));
        assert_eq!(request.field(ContactField::LastName), None);
        assert_eq!(request.field(ContactField::PhoneNumber), Some("0123456789"));
    }

    #[test]
    fn test_new_contact_accepts_empty_strings() {
        let contact = NewContact::new(Some(""), Some(""), Some(""))
            .into_contact()
            .unwrap();
        assert_eq!(contact.first_name(), "");
        assert_eq!(contact.phone_number(), "");
    }

    #[test]
    fn test_new_contact_deserialization() {
        let json = r#"{"first_name":"John","last_name":null}"#;
        let request: NewContact = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name.as_deref(), Some("John"));
        assert!(request.last_name.is_none());
        assert!(request.phone_number.is_none());
    }

    #[test]
    fn test_new_contact_from_contact() {
        let contact = Contact::new("Jane", "Roe", "555");
        let request = NewContact::from(&contact);
        assert_eq!(request.into_contact().unwrap(), contact);
    }
}
