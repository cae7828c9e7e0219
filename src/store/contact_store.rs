//! In-memory contact store.

use crate::config::Config;
use crate::error::ContactResult;
use crate::metrics::StoreMetrics;
use crate::models::{Contact, NewContact};
use std::slice;
use tracing::{debug, warn};

/// Ordered, append-only collection of contacts.
///
/// Every stored contact has all three fields present. The store only grows:
/// there is no update, delete or clear. Not synchronized; share it through
/// [`InMemoryContactRepository`](crate::repositories::InMemoryContactRepository)
/// when several tasks need access.
///
/// # Example
///
/// ```
/// use contact_manager::ContactStore;
///
/// let mut store = ContactStore::new();
/// store.add(Some("John"), Some("Doe"), Some("0123456789")).unwrap();
/// assert_eq!(store.len(), 1);
///
/// assert!(store.add(None, Some("Doe"), Some("0123456789")).is_err());
/// assert_eq!(store.len(), 1);
/// ```
///
/// Cloning copies the contacts but starts fresh metrics; counters are only
/// shared through [`ContactStore::with_metrics`].
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    metrics: StoreMetrics,
}

impl Clone for ContactStore {
    fn clone(&self) -> Self {
        Self {
            contacts: self.contacts.clone(),
            metrics: StoreMetrics::new(),
        }
    }
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity),
            metrics: StoreMetrics::new(),
        }
    }

    /// Create an empty store sized from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Create an empty store that reports into existing metrics.
    pub fn with_metrics(metrics: StoreMetrics) -> Self {
        Self {
            contacts: Vec::new(),
            metrics,
        }
    }

    /// Add a contact built from three optional values.
    ///
    /// `None` stands for a null argument. Empty strings are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` naming the first absent field
    /// (first name, then last name, then phone number). The store is left
    /// unchanged.
    pub fn add(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<()> {
        self.add_contact(NewContact::new(first_name, last_name, phone_number))
            .map(|_| ())
    }

    /// Validate a request and append the resulting contact.
    ///
    /// Returns a reference to the stored contact.
    pub fn add_contact(&mut self, request: NewContact) -> ContactResult<&Contact> {
        let contact = match request.into_contact() {
            Ok(contact) => contact,
            Err(e) => {
                self.metrics.record_validation_failure();
                warn!(
                    field = e.missing_field().map(|f| f.key()),
                    error = %e,
                    "Rejected contact"
                );
                return Err(e);
            }
        };

        let idx = self.contacts.len();
        self.contacts.push(contact);
        self.metrics.record_contact_added();
        debug!(
            size = self.contacts.len(),
            attempts = self.metrics.summary().attempts_total(),
            "Contact added"
        );

        Ok(&self.contacts[idx])
    }

    /// Parse a JSON contact request and add it.
    ///
    /// Missing keys and `null` values are treated alike.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Json` for malformed input and
    /// `ContactError::InvalidArgument` for absent fields.
    pub fn add_json(&mut self, json: &str) -> ContactResult<&Contact> {
        let request: NewContact = match serde_json::from_str(json) {
            Ok(request) => request,
            Err(e) => {
                self.metrics.record_validation_failure();
                warn!(error = %e, "Rejected malformed contact JSON");
                return Err(e.into());
            }
        };
        self.add_contact(request)
    }

    /// All contacts in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether no contact has been added yet.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Metrics this store reports into.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
