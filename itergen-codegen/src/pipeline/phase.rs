//! Pipeline phase trait.

use super::GenerationContext;
use crate::Result;

/// A phase in the generation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads what the
/// previous ones stored in the context and adds its own results.
pub trait Phase {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails. Every error is fatal for the run;
    /// non-fatal findings are recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
