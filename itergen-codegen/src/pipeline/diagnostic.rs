//! Diagnostic types for the generation pipeline.
//!
//! Fatal problems abort the pipeline with an [`Error`](crate::Error); the
//! types here record the non-fatal ones. Every diagnostic is a warning: the
//! file is still generated but likely needs attention.

use serde::Serialize;

/// A warning from a pipeline phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The phase that produced this diagnostic.
    pub phase: String,
    pub message: String,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phase: phase.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warning: {}", self.message)
    }
}
