//! Generation context passed through pipeline phases.

use super::diagnostic::Diagnostic;
use crate::{GenerationPlan, GenerationRequest, ImportSet, TypeDescriptor};

/// State of one generation run.
///
/// Created per run and discarded afterwards; nothing is shared between runs.
#[derive(Debug)]
pub struct GenerationContext {
    /// The request being generated.
    pub request: GenerationRequest,
    /// The primary descriptor (populated by the parse phase).
    pub primary: Option<TypeDescriptor>,
    /// Map result descriptors in declaration order (parse phase).
    pub map_results: Vec<TypeDescriptor>,
    /// Reduce accumulator descriptors in declaration order (parse phase).
    pub reducers: Vec<TypeDescriptor>,
    /// The resolved plan (populated by the resolve phase).
    pub plan: Option<GenerationPlan>,
    /// Imports of the generated file (populated by the render phase).
    pub imports: Option<ImportSet>,
    /// The rendered, unformatted source (populated by the render phase).
    pub output: Option<String>,
    /// Diagnostics collected during generation.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    /// Create a new generation context from a request.
    pub fn new(request: GenerationRequest) -> Self {
        Self {
            request,
            primary: None,
            map_results: Vec::new(),
            reducers: Vec::new(),
            plan: None,
            imports: None,
            output: None,
            diagnostics: Vec::new(),
        }
    }

    /// Map result and reduce accumulator descriptors, in that order.
    pub fn secondaries(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.map_results.iter().chain(self.reducers.iter())
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = GenerationContext::new(GenerationRequest::new("int", "foo"));

        assert!(ctx.primary.is_none());
        assert!(ctx.plan.is_none());
        assert!(ctx.output.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = GenerationContext::new(GenerationRequest::new("int", "foo"));

        assert_eq!(ctx.warnings().count(), 0);

        ctx.add_warning("test", "test warning");
        assert_eq!(ctx.warnings().count(), 1);
        assert_eq!(ctx.diagnostics[0].phase, "test");
    }

    #[test]
    fn test_secondaries_order() {
        let mut ctx = GenerationContext::new(GenerationRequest::new("int", "foo"));
        ctx.map_results.push(TypeDescriptor::parse("string").unwrap());
        ctx.reducers.push(TypeDescriptor::parse("bool").unwrap());

        let names: Vec<_> = ctx.secondaries().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["String", "Bool"]);
    }
}
