//! Plan command report data structures.

use itergen_codegen::{Kind, Section};
use serde::Serialize;

use super::output::{Output, Report};

/// What a request would generate.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    /// Element type spelling.
    #[serde(rename = "type")]
    pub type_text: String,
    /// Derived type name.
    pub name: String,
    pub kind: Kind,
    pub package: String,
    pub file_name: String,
    /// Sections in emission order.
    pub sections: Vec<Section>,
    /// Names of the map result conversions.
    pub map_results: Vec<String>,
    /// Names of the reducers.
    pub reducers: Vec<String>,
    pub imports: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.title(&self.file_name);
        out.key_value("Type", &format!("{} ({})", self.type_text, self.name));
        out.key_value("Kind", &self.kind.to_string());
        out.key_value("Package", &self.package);
        out.newline();

        out.section("Sections");
        for (i, section) in self.sections.iter().enumerate() {
            let detail = match section {
                Section::MapResults => format!(" ({})", self.map_results.join(", ")),
                Section::Reduce => format!(" ({})", self.reducers.join(", ")),
                _ => String::new(),
            };
            out.numbered_item(i + 1, &format!("{}{}", section, detail));
        }
        out.newline();

        out.section("Imports");
        for import in &self.imports {
            out.list_item(import);
        }
    }
}
