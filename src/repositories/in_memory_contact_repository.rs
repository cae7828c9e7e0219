use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ContactResult;
use crate::metrics::StoreMetrics;
use crate::models::{Contact, NewContact};
use crate::repositories::traits::ContactRepository;
use crate::store::ContactStore;

/// Contact repository backed by a shared in-memory `ContactStore`.
///
/// Writers are serialized by an async `RwLock`; clones share the same store.
#[derive(Clone)]
pub struct InMemoryContactRepository {
    store: Arc<RwLock<ContactStore>>,
}

impl InMemoryContactRepository {
    /// Create a repository over an empty store.
    pub fn new() -> Self {
        Self::with_store(ContactStore::new())
    }

    /// Create a repository over an existing store.
    pub fn with_store(store: ContactStore) -> Self {
        info!(size = store.len(), "Contact repository initialized");
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Metrics of the underlying store.
    pub async fn metrics(&self) -> StoreMetrics {
        self.store.read().await.metrics().clone()
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn add(&self, request: NewContact) -> ContactResult<Contact> {
        let mut store = self.store.write().await;
        store.add_contact(request).cloned()
    }

    async fn list(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.store.read().await.list().to_vec())
    }

    async fn count(&self) -> ContactResult<usize> {
        Ok(self.store.read().await.len())
    }
}
