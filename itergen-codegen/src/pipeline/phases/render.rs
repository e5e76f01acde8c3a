//! Render phase - aggregates imports and renders every planned section.

use tracing::debug;

use crate::{
    Error, ImportSet, Result, SectionRenderer, TemplateStore,
    pipeline::{GenerationContext, Phase},
    render::RenderInput,
};

/// Phase that renders the plan into the unformatted source buffer.
pub struct RenderPhase<'a> {
    store: &'a TemplateStore,
}

impl<'a> RenderPhase<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }
}

impl Phase for RenderPhase<'_> {
    fn name(&self) -> &'static str {
        "render"
    }

    fn description(&self) -> &'static str {
        "Render the planned sections from templates"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let (Some(primary), Some(plan)) = (ctx.primary.as_ref(), ctx.plan.as_ref()) else {
            return Err(Error::phase_order(self.name(), "resolve"));
        };

        let imports = ImportSet::aggregate(primary, ctx.secondaries(), plan);
        debug!(imports = ?imports.to_vec(), "aggregated imports");

        let input = RenderInput {
            package: &ctx.request.pkg,
            primary,
            map_results: &ctx.map_results,
            reducers: &ctx.reducers,
            imports: &imports,
        };
        let output = SectionRenderer::new(self.store).render_plan(plan, &input)?;
        debug!(bytes = output.len(), "rendered source");

        ctx.imports = Some(imports);
        ctx.output = Some(output);
        Ok(())
    }
}
