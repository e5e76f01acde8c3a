//! The generator facade: pipeline, formatter and writer.

use std::path::PathBuf;

use tracing::info;

use crate::{
    Error, Formatter, GenerationRequest, GoFmt, Result, Section, TemplateStore, TypeDescriptor,
    naming,
    pipeline::{Diagnostic, GenerationContext, Pipeline},
};

/// A generated source file, formatted and ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Where the file goes (output directory + derived file name).
    pub path: PathBuf,
    /// Formatted file content.
    pub content: Vec<u8>,
    /// The primary descriptor the file was generated for.
    pub descriptor: TypeDescriptor,
    /// Rendered sections, in emission order.
    pub sections: Vec<Section>,
    /// Import paths of the file, sorted.
    pub imports: Vec<String>,
    /// Non-fatal findings of the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedFile {
    /// File name without the directory.
    pub fn file_name(&self) -> String {
        naming::file_name(&self.descriptor)
    }

    /// Content as text.
    pub fn content_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Generates one iterable source file per request.
///
/// # Example
///
/// ```
/// use itergen_codegen::{GenerationRequest, Generator, Passthrough, TemplateStore};
///
/// let store = TemplateStore::embedded();
/// let generator = Generator::new(&store).with_formatter(Passthrough);
///
/// let file = generator
///     .preview(GenerationRequest::new("os:*os.File", "files"))
///     .unwrap();
/// assert_eq!(file.file_name(), "osfile_iter.go");
/// ```
pub struct Generator<'a> {
    store: &'a TemplateStore,
    formatter: Box<dyn Formatter + 'a>,
    output_dir: PathBuf,
}

impl<'a> Generator<'a> {
    /// Create a generator formatting with `gofmt` and writing to the current directory.
    pub fn new(store: &'a TemplateStore) -> Self {
        Self {
            store,
            formatter: Box::new(GoFmt::new()),
            output_dir: PathBuf::from("."),
        }
    }

    /// Replace the formatter.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'a) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Resolve file names relative to `dir` instead of the current directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Name of the configured formatter.
    pub fn formatter_name(&self) -> &'static str {
        self.formatter.name()
    }

    /// Parse and resolve the request without rendering or writing.
    pub fn resolve(&self, request: GenerationRequest) -> Result<GenerationContext> {
        Pipeline::new(self.store).resolve(request)
    }

    /// Render and format the file without writing it.
    pub fn preview(&self, request: GenerationRequest) -> Result<GeneratedFile> {
        let ctx = Pipeline::new(self.store).run(request)?;
        let GenerationContext {
            primary,
            plan,
            imports,
            output,
            diagnostics,
            ..
        } = ctx;

        let (Some(descriptor), Some(plan), Some(imports), Some(output)) =
            (primary, plan, imports, output)
        else {
            return Err(Error::phase_order("preview", "render"));
        };

        let content = self.formatter.format(output.as_bytes())?;

        Ok(GeneratedFile {
            path: naming::output_path(&self.output_dir, &descriptor),
            content,
            sections: plan.sections(),
            imports: imports.iter().map(str::to_string).collect(),
            descriptor,
            diagnostics,
        })
    }

    /// Render, format and write the file, replacing any previous version.
    ///
    /// Nothing is written unless every step before the write succeeded.
    pub fn generate(&self, request: GenerationRequest) -> Result<GeneratedFile> {
        let file = self.preview(request)?;
        itergen_core::write(&file.path, &file.content).map_err(|e| Error::io(&file.path, e))?;
        info!(
            path = %file.path.display(),
            bytes = file.content.len(),
            formatter = self.formatter.name(),
            "wrote generated file"
        );
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Passthrough;

    fn request() -> GenerationRequest {
        GenerationRequest {
            map: vec!["int".to_string()],
            filter: true,
            ..GenerationRequest::new("float64", "examples")
        }
    }

    #[test]
    fn test_preview_does_not_write() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::embedded();
        let generator = Generator::new(&store)
            .with_formatter(Passthrough)
            .with_output_dir(temp.path());

        let file = generator.preview(request()).unwrap();

        assert_eq!(file.path, temp.path().join("float64_iter.go"));
        assert!(!file.path.exists());
        assert_eq!(file.imports, vec!["errors"]);
    }

    #[test]
    fn test_generate_writes_file() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::embedded();
        let generator = Generator::new(&store)
            .with_formatter(Passthrough)
            .with_output_dir(temp.path());

        let file = generator.generate(request()).unwrap();

        let written = fs::read(temp.path().join("float64_iter.go")).unwrap();
        assert_eq!(written, file.content);
    }

    #[test]
    fn test_generate_replaces_previous_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("float64_iter.go");
        fs::write(&path, "stale").unwrap();

        let store = TemplateStore::embedded();
        Generator::new(&store)
            .with_formatter(Passthrough)
            .with_output_dir(temp.path())
            .generate(request())
            .unwrap();

        assert!(fs::read_to_string(&path).unwrap().starts_with("package examples"));
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::embedded();
        let generator = Generator::new(&store)
            .with_formatter(Passthrough)
            .with_output_dir(temp.path());

        let bad = GenerationRequest {
            array: true,
            ..request()
        };
        assert!(generator.generate(bad).is_err());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_format_error_aborts_before_write() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::embedded();
        let generator = Generator::new(&store)
            .with_formatter(GoFmt::with_program("itergen-no-such-gofmt-binary"))
            .with_output_dir(temp.path());

        let err = generator.generate(request()).unwrap_err();
        assert!(matches!(*err, Error::Format { .. }));
        assert!(!temp.path().join("float64_iter.go").exists());
    }
}
