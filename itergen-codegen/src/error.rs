use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::plan::{Capability, Kind};

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid channel type given: '{raw}'")]
    #[diagnostic(
        code(itergen::invalid_channel),
        help("only bidirectional channels are supported, e.g. 'chan float64'")
    )]
    InvalidChannelSyntax { raw: String },

    #[error("malformed type '{raw}': {reason}")]
    #[diagnostic(
        code(itergen::malformed_type),
        help("use 'type' or 'package:type', e.g. 'os:*os.File'")
    )]
    MalformedType { raw: String, reason: String },

    #[error("type '{raw}' derives the name '{name}', which is not a valid identifier")]
    #[diagnostic(
        code(itergen::invalid_type_name),
        help("declare a named type for it first and generate for that name instead")
    )]
    InvalidTypeName { raw: String, name: String },

    #[error("{kind} type does not support {capability}")]
    #[diagnostic(
        code(itergen::capability),
        help(
            "channel iterables support map, filter, foreach, concat, reduce and array; plain iterables support everything but array"
        )
    )]
    Capability { capability: Capability, kind: Kind },

    #[error("template '{key}' not found")]
    #[diagnostic(
        code(itergen::template_not_found),
        help("the template store is out of sync with the section list; this is a bug")
    )]
    TemplateNotFound { key: String },

    #[error("failed to render template '{key}'")]
    #[diagnostic(code(itergen::render))]
    Render {
        key: String,
        #[source]
        source: tera::Error,
    },

    #[error("phase '{phase}' ran before '{requires}'")]
    #[diagnostic(code(itergen::phase_order))]
    PhaseOrder {
        phase: &'static str,
        requires: &'static str,
    },

    #[error("failed to format generated source: {message}")]
    #[diagnostic(
        code(itergen::format),
        help("rerun with --no-fmt --dry-run to inspect the unformatted output")
    )]
    Format { message: String },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(itergen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(itergen::config))]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(itergen::config))]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a capability error
    pub fn capability(capability: Capability, kind: Kind) -> Box<Self> {
        Box::new(Error::Capability { capability, kind })
    }

    /// Create a malformed type error
    pub fn malformed(raw: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedType {
            raw: raw.into(),
            reason: reason.into(),
        })
    }

    /// Create a template-not-found error
    pub fn template_not_found(key: impl Into<String>) -> Box<Self> {
        Box::new(Error::TemplateNotFound { key: key.into() })
    }

    /// Create a phase ordering error
    pub fn phase_order(phase: &'static str, requires: &'static str) -> Box<Self> {
        Box::new(Error::PhaseOrder { phase, requires })
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
