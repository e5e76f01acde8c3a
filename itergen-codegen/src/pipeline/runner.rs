//! Pipeline orchestrator.

use tracing::{debug, debug_span};

use super::{
    GenerationContext, Phase,
    phases::{ParsePhase, RenderPhase, ResolvePhase},
};
use crate::{GenerationRequest, Result, TemplateStore};

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (parse, resolve, render) in order over a fresh
/// [`GenerationContext`]. The first failing phase aborts the run.
pub struct Pipeline<'a> {
    store: &'a TemplateStore,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline rendering from the given template store.
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    /// Parse and resolve the request without rendering anything.
    pub fn resolve(&self, request: GenerationRequest) -> Result<GenerationContext> {
        self.run_phases(request, &[&ParsePhase, &ResolvePhase])
    }

    /// Run every phase, producing the rendered source in `ctx.output`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first phase that fails.
    pub fn run(&self, request: GenerationRequest) -> Result<GenerationContext> {
        let render = RenderPhase::new(self.store);
        self.run_phases(request, &[&ParsePhase, &ResolvePhase, &render])
    }

    fn run_phases(
        &self,
        request: GenerationRequest,
        phases: &[&dyn Phase],
    ) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(request);
        for phase in phases {
            let _span = debug_span!("phase", name = phase.name()).entered();
            debug!(description = phase.description(), "running phase");
            phase.run(&mut ctx)?;
        }
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Kind};

    #[test]
    fn test_resolve_does_not_render() {
        let store = TemplateStore::embedded();
        let ctx = Pipeline::new(&store)
            .resolve(GenerationRequest::new("chan int", "foo"))
            .expect("pipeline should succeed");

        assert_eq!(ctx.plan.as_ref().map(|p| p.kind()), Some(Kind::Channel));
        assert!(ctx.output.is_none());
        assert!(ctx.imports.is_none());
    }

    #[test]
    fn test_run_populates_output() {
        let store = TemplateStore::embedded();
        let ctx = Pipeline::new(&store)
            .run(GenerationRequest::new("int", "foo"))
            .expect("pipeline should succeed");

        assert!(ctx.primary.is_some());
        assert!(ctx.imports.is_some());
        assert!(ctx.output.unwrap().starts_with("package foo\n"));
    }

    #[test]
    fn test_run_stops_at_first_error() {
        let store = TemplateStore::embedded();
        let request = GenerationRequest {
            array: true,
            ..GenerationRequest::new("int", "foo")
        };

        let err = Pipeline::new(&store).run(request).unwrap_err();
        assert!(matches!(*err, Error::Capability { .. }));
    }

    #[test]
    fn test_empty_store_fails_render() {
        let store = TemplateStore::from_entries(Vec::<(String, String)>::new());
        let err = Pipeline::new(&store)
            .run(GenerationRequest::new("int", "foo"))
            .unwrap_err();
        assert!(matches!(*err, Error::TemplateNotFound { ref key } if key == "imports"));
    }
}
