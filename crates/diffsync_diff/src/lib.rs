//! # DiffSync Diff
//!
//! Text differencing and patch application for differential
//! synchronization.
//!
//! This crate provides:
//! - The [`Differ`] trait, the seam between the sync engine and the
//!   underlying text-diff algorithm
//! - [`TextDiffer`], the default implementation backed by the
//!   `dissimilar` diff-match-patch port
//!
//! Patch application is strict: `UNCHANGED` and `DELETE` operations must
//! match the text they claim to cover, otherwise application fails with
//! [`DiffError::ContextMismatch`] and the document is left untouched.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod differ;
mod error;
mod text;

pub use differ::Differ;
pub use error::{DiffError, DiffResult};
pub use text::TextDiffer;
