//! Generate command report data structures.

use std::path::PathBuf;

use itergen_codegen::{Kind, Section};

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Element type spelling.
    pub type_text: String,
    /// Derived type name.
    pub name: String,
    pub kind: Kind,
    /// Package clause of the file.
    pub package: String,
    /// Rendered sections in emission order.
    pub sections: Vec<Section>,
    pub imports: Vec<String>,
    /// Name of the formatter the output went through.
    pub formatter: &'static str,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Outcome of the run.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written { path: PathBuf },
    /// Dry-run preview.
    Preview { file_name: String, content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Preview { file_name, content } => {
                out.divider(file_name);
                out.preformatted(content);
            }
            GenerationResult::Written { path } => self.render_written(out, path),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, path: &std::path::Path) {
        out.key_value("Type", &format!("{} ({})", self.type_text, self.name));
        out.key_value("Kind", &self.kind.to_string());
        out.key_value("Package", &self.package);
        out.key_value("Formatter", self.formatter);
        out.newline();

        out.section(&format!("Sections ({})", self.sections.len()));
        for (i, section) in self.sections.iter().enumerate() {
            out.numbered_item(i + 1, &section.to_string());
        }
        out.newline();

        out.key_value("Generated", &path.display().to_string());
    }
}
