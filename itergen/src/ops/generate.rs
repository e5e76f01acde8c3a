//! Generate operation - render and write one iterable file.

use std::path::Path;

use itergen_codegen::{GenerationRequest, Generator, Passthrough, Result, TemplateStore};
use tracing::debug;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the file name is resolved in.
    pub output_dir: &'a Path,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
    /// Whether to run the output through gofmt.
    pub format: bool,
}

/// Execute the generate operation.
///
/// Nothing is written when `dry_run` is set or when any step fails.
pub fn generate(
    store: &TemplateStore,
    request: GenerationRequest,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    debug!(
        ty = %request.raw_type,
        dry_run = opts.dry_run,
        format = opts.format,
        "generate"
    );
    let package = request.pkg.clone();

    let mut generator = Generator::new(store).with_output_dir(opts.output_dir);
    if !opts.format {
        generator = generator.with_formatter(Passthrough);
    }

    let file = if opts.dry_run {
        generator.preview(request)?
    } else {
        generator.generate(request)?
    };

    let kind = file.descriptor.kind();
    let warnings = file
        .diagnostics
        .iter()
        .map(|d| d.message.clone())
        .collect();

    let result = if opts.dry_run {
        GenerationResult::Preview {
            file_name: file.file_name(),
            content: file.content_str().into_owned(),
        }
    } else {
        GenerationResult::Written { path: file.path }
    };

    Ok(GenerateReport {
        type_text: file.descriptor.type_text,
        name: file.descriptor.name,
        kind,
        package,
        sections: file.sections,
        imports: file.imports,
        formatter: generator.formatter_name(),
        warnings,
        result,
    })
}
