//! Contact Manager - an in-memory contact list with validated inserts.
//!
//! Contacts hold a first name, a last name and a phone number. Each of the
//! three values must be present when a contact is added; nothing else is
//! validated. Contacts are kept in insertion order, duplicates included.
//!
//! # Architecture
//!
//! - **models**: `Contact` and the unvalidated `NewContact` request
//! - **domain**: `ContactField`, the identifier carried by validation errors
//! - **error**: Custom error types for precise error handling
//! - **store**: `ContactStore`, the single-threaded append-only list
//! - **repositories**: Async repository seam with a shared in-memory implementation
//! - **metrics**: Insert counters
//! - **config**: Configuration management from environment variables
//! - **observability**: `tracing` subscriber setup

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod store;

pub use config::Config;
pub use domain::ContactField;
pub use error::{ConfigError, ContactError, ContactResult};
pub use metrics::{MetricsSummary, StoreMetrics};
pub use models::{Contact, NewContact};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use store::ContactStore;
