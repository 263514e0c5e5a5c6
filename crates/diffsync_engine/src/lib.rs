//! # DiffSync Engine
//!
//! Server-side reconciliation engine for differential synchronization.
//!
//! This crate provides:
//! - [`ServerSyncEngine`], the per-(document, client) state machine
//! - Subscription seeding (`add_document`)
//! - Outbound diff computation (`diff`)
//! - Inbound reconciliation with backup recovery (`patch`)
//!
//! ## Key Invariants
//!
//! - The server document is authoritative
//! - Operations for the same (document, client) pair are serialized;
//!   different pairs never block each other
//! - `patch` is idempotent: re-delivering an already-applied message is
//!   a silent no-op
//! - A lost server-to-client round trip is repaired from the shadow
//!   backup without resending full documents

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod locks;

pub use engine::ServerSyncEngine;
pub use error::{SyncError, SyncResult};
