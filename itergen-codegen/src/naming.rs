//! Output file naming.
//!
//! The file name is a pure function of the descriptor: the element type
//! spelling is reduced to `[a-z0-9]` and suffixed by kind.

use std::path::{Path, PathBuf};

use itergen_core::fileify;

use crate::{Kind, TypeDescriptor};

/// Extension of generated sources.
pub const EXTENSION: &str = "go";

/// File name for the descriptor (e.g., `*os.File` -> `osfile_iter.go`).
pub fn file_name(descriptor: &TypeDescriptor) -> String {
    let stem = fileify(&descriptor.type_text);
    match descriptor.kind() {
        Kind::Plain => format!("{}_iter.{}", stem, EXTENSION),
        Kind::Channel => format!("{}chan_iter.{}", stem, EXTENSION),
    }
}

/// Path of the generated file inside `dir`.
pub fn output_path(dir: &Path, descriptor: &TypeDescriptor) -> PathBuf {
    dir.join(file_name(descriptor))
}
