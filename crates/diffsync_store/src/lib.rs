//! # DiffSync Store
//!
//! Data store trait and implementations for differential
//! synchronization.
//!
//! This crate provides the persistence abstraction the sync engine
//! reads and writes through. Stores are keyed value stores for
//! documents, shadows, backups, and pending edits - they do not
//! interpret diff operations or version numbers.
//!
//! ## Design Principles
//!
//! - Returned values are copies; mutating them never corrupts stored
//!   state
//! - Exactly one live shadow and at most one backup per
//!   (document, client) pair
//! - Must be `Send + Sync` for concurrent access
//!
//! ## Available Stores
//!
//! - [`InMemoryDataStore`] - For testing and ephemeral servers

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod store;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDataStore;
pub use store::DataStore;
