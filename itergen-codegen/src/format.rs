//! Formatting of the rendered buffer before it is written.

use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use tracing::debug;

use crate::{Error, Result};

/// Turns the rendered buffer into canonical source.
pub trait Formatter {
    /// Name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Format `source`, failing with [`Error::Format`] if it is not valid.
    fn format(&self, source: &[u8]) -> Result<Vec<u8>>;
}

/// Formats through the `gofmt` binary.
#[derive(Debug, Clone)]
pub struct GoFmt {
    program: PathBuf,
}

impl GoFmt {
    pub fn new() -> Self {
        Self::with_program("gofmt")
    }

    /// Use a specific `gofmt` executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GoFmt {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for GoFmt {
    fn name(&self) -> &'static str {
        "gofmt"
    }

    fn format(&self, source: &[u8]) -> Result<Vec<u8>> {
        let format_error = |message: String| Box::new(Error::Format { message });

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format_error(format!("could not run {}: {}", self.program.display(), e)))?;

        // gofmt reads all of stdin before writing anything
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source)
                .map_err(|e| format_error(format!("could not pipe source: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| format_error(format!("{} did not finish: {}", self.program.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format_error(stderr.trim().to_string()));
        }

        debug!(bytes = output.stdout.len(), "formatted with gofmt");
        Ok(output.stdout)
    }
}

/// Leaves the buffer untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn name(&self) -> &'static str {
        "none"
    }

    fn format(&self, source: &[u8]) -> Result<Vec<u8>> {
        Ok(source.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_is_identity() {
        let source = b"package foo\n";
        assert_eq!(Passthrough.format(source).unwrap(), source.to_vec());
    }

    #[test]
    fn test_missing_program_is_format_error() {
        let fmt = GoFmt::with_program("itergen-no-such-gofmt-binary");
        let err = fmt.format(b"package foo\n").unwrap_err();
        assert!(matches!(*err, Error::Format { .. }));
        assert!(err.to_string().contains("could not run"));
    }
}
