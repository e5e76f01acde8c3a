//! Generation engine for itergen.
//!
//! Given a [`GenerationRequest`] naming a Go element type and a set of
//! capabilities, the engine produces a single Go source file implementing an
//! iterable type specialized for that element type.
//!
//! # Module Organization
//!
//! - [`descriptor`] - Type token parsing into [`TypeDescriptor`]s
//! - [`plan`] - Capability matrix and the ordered [`GenerationPlan`]
//! - [`templates`] - The embedded [`TemplateStore`]
//! - [`render`] - The [`SectionRenderer`] turning plan steps into text
//! - [`imports`] - Import aggregation ([`ImportSet`])
//! - [`naming`] - Output file naming
//! - [`format`] - Formatter seam (`gofmt` or passthrough)
//! - [`pipeline`] - Phase orchestration and diagnostics
//! - [`generator`] - The [`Generator`] facade tying it all together

pub mod descriptor;
mod error;
pub mod format;
pub mod generator;
pub mod imports;
pub mod naming;
pub mod pipeline;
pub mod plan;
pub mod render;
mod request;
pub mod templates;

pub use descriptor::TypeDescriptor;
pub use error::{Error, Result};
pub use format::{Formatter, GoFmt, Passthrough};
pub use generator::{GeneratedFile, Generator};
pub use imports::ImportSet;
pub use plan::{Capability, GenerationPlan, Kind, Section};
pub use render::SectionRenderer;
pub use request::GenerationRequest;
pub use templates::TemplateStore;
