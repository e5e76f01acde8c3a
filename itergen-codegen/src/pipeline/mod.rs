//! Generation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator running the generation
//! phases over a shared [`GenerationContext`]:
//!
//! - `parse` - turns the raw type tokens into descriptors
//! - `resolve` - checks capabilities and builds the plan
//! - `render` - aggregates imports and renders the sections
//!
//! Any phase error aborts the run before anything is written.
//!
//! # Example
//!
//! ```
//! use itergen_codegen::{GenerationRequest, TemplateStore, pipeline::Pipeline};
//!
//! let store = TemplateStore::embedded();
//! let request = GenerationRequest {
//!     filter: true,
//!     ..GenerationRequest::new("float64", "examples")
//! };
//!
//! let ctx = Pipeline::new(&store).run(request).unwrap();
//! assert!(ctx.output.unwrap().contains("func (i Float64Iter) Filter("));
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::Diagnostic;
pub use phase::Phase;
pub use runner::Pipeline;
