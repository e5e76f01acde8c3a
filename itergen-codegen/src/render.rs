//! Section rendering.
//!
//! Every [`Section`] maps to one render step. Steps are pure functions of the
//! [`RenderInput`]; the renderer runs the steps selected by the plan in
//! emission order and concatenates their output.

use tera::{Context, Tera};
use tracing::trace;

use crate::{Error, GenerationPlan, ImportSet, Result, Section, TemplateStore, TypeDescriptor};

/// Everything a render step may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// Package clause of the generated file.
    pub package: &'a str,
    pub primary: &'a TypeDescriptor,
    /// Map result types, in declaration order.
    pub map_results: &'a [TypeDescriptor],
    /// Reduce accumulator types, in declaration order.
    pub reducers: &'a [TypeDescriptor],
    pub imports: &'a ImportSet,
}

type RenderStep = fn(&SectionRenderer<'_>, Section, &RenderInput<'_>) -> Result<String>;

/// Renders plan sections against the templates of a [`TemplateStore`].
pub struct SectionRenderer<'a> {
    store: &'a TemplateStore,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    /// Render every section of the plan, in order, into one buffer.
    pub fn render_plan(&self, plan: &GenerationPlan, input: &RenderInput<'_>) -> Result<String> {
        let mut buffer = String::new();
        for section in plan.sections() {
            let text = self.render(section, input)?;
            trace!(%section, bytes = text.len(), "rendered section");
            buffer.push_str(&text);
        }
        Ok(buffer)
    }

    /// Render a single section.
    pub fn render(&self, section: Section, input: &RenderInput<'_>) -> Result<String> {
        (step(section))(self, section, input)
    }

    fn render_template(
        &self,
        section: Section,
        input: &RenderInput<'_>,
        context: &Context,
    ) -> Result<String> {
        let section_key = section.template_key().unwrap_or_default();
        let key = TemplateStore::key(section_key, input.primary.kind());
        let text = self.store.get(&key)?;
        Tera::one_off(text, context, false)
            .map_err(|source| Box::new(Error::Render { key, source }))
    }
}

fn step(section: Section) -> RenderStep {
    match section {
        Section::Package => render_package,
        Section::Imports => render_imports,
        Section::MapResults => render_map_results,
        Section::Reduce => render_reduce,
        _ => render_single,
    }
}

fn render_package(_: &SectionRenderer<'_>, _: Section, input: &RenderInput<'_>) -> Result<String> {
    Ok(format!("package {}\n\n", input.package))
}

fn render_imports(
    renderer: &SectionRenderer<'_>,
    section: Section,
    input: &RenderInput<'_>,
) -> Result<String> {
    let mut context = Context::new();
    context.insert("packages", &input.imports.to_vec());
    renderer.render_template(section, input, &context)
}

fn render_single(
    renderer: &SectionRenderer<'_>,
    section: Section,
    input: &RenderInput<'_>,
) -> Result<String> {
    renderer.render_template(section, input, &primary_context(input.primary))
}

fn render_map_results(
    renderer: &SectionRenderer<'_>,
    section: Section,
    input: &RenderInput<'_>,
) -> Result<String> {
    let mut context = primary_context(input.primary);
    context.insert("results", input.map_results);
    renderer.render_template(section, input, &context)
}

fn render_reduce(
    renderer: &SectionRenderer<'_>,
    section: Section,
    input: &RenderInput<'_>,
) -> Result<String> {
    let mut context = primary_context(input.primary);
    context.insert("reducers", input.reducers);
    renderer.render_template(section, input, &context)
}

fn primary_context(primary: &TypeDescriptor) -> Context {
    let mut context = Context::new();
    context.insert("name", &primary.name);
    context.insert("ty", &primary.type_text);
    context
}
