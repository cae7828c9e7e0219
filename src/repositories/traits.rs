use crate::error::ContactResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so callers that run on an
/// async runtime can share one contact list.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Validate and store a new contact, returning the stored value.
    async fn add(&self, request: NewContact) -> ContactResult<Contact>;

    /// Snapshot of all contacts in insertion order.
    async fn list(&self) -> ContactResult<Vec<Contact>>;

    /// Number of stored contacts.
    async fn count(&self) -> ContactResult<usize>;
}
