//! Resolve phase - checks the capability matrix and builds the plan.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    Error, GenerationPlan, Kind, Result, TypeDescriptor,
    pipeline::{GenerationContext, Phase},
};

/// Phase that resolves the request into a [`GenerationPlan`].
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Validate capabilities and order the sections to render"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let primary = ctx
            .primary
            .as_ref()
            .ok_or_else(|| Error::phase_order(self.name(), "parse"))?;

        let plan = GenerationPlan::resolve(primary, &ctx.request)?;
        debug!(kind = %plan.kind(), sections = ?plan.sections(), "resolved plan");

        let mut warnings: Vec<String> = ctx
            .map_results
            .iter()
            .find(|ty| ty.name == primary.name)
            .map(|ty| {
                format!(
                    "map type '{}' is the element type; {} is declared twice",
                    ty.type_text,
                    self_conversion_error(primary)
                )
            })
            .into_iter()
            .collect();
        warnings.extend(duplicates(&ctx.map_results).map(|ty| {
            format!(
                "duplicate map type '{}' generates To{} twice",
                ty.type_text, ty.name
            )
        }));
        warnings.extend(duplicates(&ctx.reducers).map(|ty| {
            format!(
                "duplicate reduce type '{}' generates Reduce{} twice",
                ty.type_text, ty.name
            )
        }));
        for warning in warnings {
            ctx.add_warning(self.name(), warning);
        }

        ctx.plan = Some(plan);
        Ok(())
    }
}

/// The error variable declared by the map section for converting back to the
/// element type.
fn self_conversion_error(primary: &TypeDescriptor) -> String {
    match primary.kind() {
        Kind::Plain => format!("Err{}To{}", primary.name, primary.name),
        Kind::Channel => format!("Err{}ChanTo{}", primary.name, primary.name),
    }
}

/// Descriptors whose derived name was already seen earlier in the list.
fn duplicates(descriptors: &[TypeDescriptor]) -> impl Iterator<Item = &TypeDescriptor> {
    let mut seen = HashSet::new();
    descriptors
        .iter()
        .filter(move |d| !seen.insert(d.name.clone()))
}
