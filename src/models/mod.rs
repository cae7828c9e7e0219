//! Data models for the contact manager.
//!
//! This module contains the stored `Contact` record and the unvalidated
//! `NewContact` request it is built from.

pub mod contact;

pub use contact::{Contact, NewContact};
