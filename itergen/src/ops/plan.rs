//! Plan operation - resolve a request without rendering.

use itergen_codegen::{
    Error, GenerationRequest, Generator, ImportSet, Result, TemplateStore, naming,
};

use crate::reports::PlanReport;

/// Execute the plan operation.
///
/// Parses and resolves the request, then derives the imports and file name
/// the generated file would have.
pub fn plan(store: &TemplateStore, request: GenerationRequest) -> Result<PlanReport> {
    let ctx = Generator::new(store).resolve(request)?;
    let (Some(primary), Some(plan)) = (&ctx.primary, &ctx.plan) else {
        return Err(Error::phase_order("plan", "resolve"));
    };

    let imports = ImportSet::aggregate(primary, ctx.secondaries(), plan);

    Ok(PlanReport {
        type_text: primary.type_text.clone(),
        name: primary.name.clone(),
        kind: plan.kind(),
        package: ctx.request.pkg.clone(),
        file_name: naming::file_name(primary),
        sections: plan.sections(),
        map_results: ctx.map_results.iter().map(|d| d.name.clone()).collect(),
        reducers: ctx.reducers.iter().map(|d| d.name.clone()).collect(),
        imports: imports.iter().map(str::to_string).collect(),
        warnings: ctx.warnings().map(|d| d.message.clone()).collect(),
    })
}
