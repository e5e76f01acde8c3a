//! Core utilities for the itergen generator.
//!
//! This crate provides the string helpers used to derive identifiers and
//! file names from type spellings, plus the single-shot file writer used to
//! persist generated sources.

mod file;
mod utils;

// File operations
pub use file::{delete_if_exists, write};
// String utilities
pub use utils::{fileify, is_identifier, title_case};
