//! Core operations.
//!
//! This module contains the business logic for itergen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod plan;

pub use generate::{GenerateOptions, generate};
pub use plan::plan;
