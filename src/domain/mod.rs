//! Domain types.
//!
//! This module contains small domain identifiers shared between the models,
//! the store and the error types.

pub mod contact_field;

pub use contact_field::ContactField;
