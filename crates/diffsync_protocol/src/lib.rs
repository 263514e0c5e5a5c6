//! # DiffSync Protocol
//!
//! Wire protocol types for differential synchronization.
//!
//! This crate provides:
//! - [`Document`] for server-side authoritative content
//! - [`Shadow`] and [`ShadowBackup`] for per-client belief state
//! - [`Edit`] and [`DiffOp`] for version-tagged diff payloads
//! - [`PatchMessage`] as the envelope exchanged in both directions
//! - JSON encoding/decoding matching the reference wire format
//!
//! This is a pure protocol crate with no I/O operations.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod edit;
mod error;
mod message;
mod shadow;

pub use document::Document;
pub use edit::{DiffOp, Edit, Operation};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{MessageType, PatchMessage};
pub use shadow::{Shadow, ShadowBackup};
